use serde::Serialize;

/// One prompt from the icebreaker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
}

/// The fixed question pool, in catalog order.
pub static QUESTIONS: [Question; 10] = [
    Question {
        id: 1,
        text: "If you could have dinner with any historical figure, who would it be and why?",
    },
    Question {
        id: 2,
        text: "What's the most adventurous thing you've ever done?",
    },
    Question {
        id: 3,
        text: "If you could instantly become an expert in one subject, what would it be?",
    },
    Question {
        id: 4,
        text: "What's your favorite childhood memory?",
    },
    Question {
        id: 5,
        text: "If you could travel anywhere in the world right now, where would you go?",
    },
    Question {
        id: 6,
        text: "What's a skill you'd like to learn or improve?",
    },
    Question {
        id: 7,
        text: "What's the best piece of advice you've ever received?",
    },
    Question {
        id: 8,
        text: "If you could have any superpower, what would it be and why?",
    },
    Question {
        id: 9,
        text: "What's a book or movie that has significantly impacted your life?",
    },
    Question {
        id: 10,
        text: "If you could switch lives with anyone for a day, who would it be?",
    },
];
