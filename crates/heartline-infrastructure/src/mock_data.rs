//! In-memory backend serving fixed records.
//!
//! `MockDataService` implements every backend trait so the client can run
//! without a server. Profiles and goals never change; sent messages and tier
//! changes are only logged.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;

use heartline_core::messaging::{Conversation, ConversationRepository, Message, OUTGOING_SENDER};
use heartline_core::profile::{CandidateSource, GrowthGoal, IcebreakerAnswer, Profile};
use heartline_core::subscription::{SubscriptionService, Tier};
use heartline_core::verification::{PersonalInfo, PhotoUpload, VerificationService};
use heartline_core::{HeartlineError, Result};

fn icebreaker_answers() -> Vec<IcebreakerAnswer> {
    vec![
        IcebreakerAnswer::new(
            "If you could have dinner with any historical figure, who would it be and why?",
            "I'd love to have dinner with Leonardo da Vinci. His curiosity and diverse interests in art, science, and engineering are truly inspiring. I'd ask him about his creative process and how he balanced his various pursuits.",
        ),
        IcebreakerAnswer::new(
            "What's the most adventurous thing you've ever done?",
            "I once went on a solo backpacking trip through Southeast Asia for three months. It was challenging but incredibly rewarding to navigate new cultures and experiences on my own.",
        ),
        IcebreakerAnswer::new(
            "If you could instantly become an expert in one subject, what would it be?",
            "I'd love to become an expert in astrophysics. The mysteries of the universe fascinate me, and I'd love to contribute to our understanding of cosmic phenomena.",
        ),
    ]
}

fn growth_goals() -> Vec<GrowthGoal> {
    [
        (1, "Learn a new language", "Become conversational in Spanish", 60),
        (2, "Improve fitness", "Run a half marathon", 40),
        (3, "Develop a new skill", "Learn to play the guitar", 25),
    ]
    .into_iter()
    .map(|(id, title, description, progress)| GrowthGoal {
        id,
        title: title.to_string(),
        description: description.to_string(),
        progress,
    })
    .collect()
}

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{photo}?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60"
    )
}

struct ProfileSeed {
    id: u32,
    name: &'static str,
    age: u8,
    location: &'static str,
    bio: &'static str,
    photos: [&'static str; 3],
    interests: [&'static str; 3],
    values: [&'static str; 3],
    compatibility_score: u8,
    premium: bool,
}

const PROFILE_SEEDS: [ProfileSeed; 3] = [
    ProfileSeed {
        id: 1,
        name: "Sarah Smith",
        age: 26,
        location: "Los Angeles, CA",
        bio: "Adventure seeker and coffee enthusiast. Let's explore the world together!",
        photos: [
            "photo-1494790108377-be9c29b29330",
            "photo-1517841905240-472988babdf9",
            "photo-1522075469751-3a6694fb2f61",
        ],
        interests: ["Travel", "Photography", "Yoga"],
        values: ["Authenticity", "Growth", "Kindness"],
        compatibility_score: 92,
        premium: false,
    },
    ProfileSeed {
        id: 2,
        name: "Mike Johnson",
        age: 29,
        location: "New York, NY",
        bio: "Tech enthusiast and foodie. Always up for trying new restaurants!",
        photos: [
            "photo-1500648767791-00dcc994a43e",
            "photo-1506794778202-cad84cf45f1d",
            "photo-1519085360753-af0119f7cbe7",
        ],
        interests: ["Technology", "Cooking", "Hiking"],
        values: ["Innovation", "Honesty", "Adventure"],
        compatibility_score: 88,
        premium: true,
    },
    ProfileSeed {
        id: 3,
        name: "Emily Chen",
        age: 24,
        location: "San Francisco, CA",
        bio: "Artist and nature lover. Looking for someone to share creative adventures with!",
        photos: [
            "photo-1517365830460-955ce3ccd263",
            "photo-1513721032312-6a18a42c8763",
            "photo-1511485977113-f34c92461ad9",
        ],
        interests: ["Painting", "Hiking", "Meditation"],
        values: ["Creativity", "Sustainability", "Personal Growth"],
        compatibility_score: 95,
        premium: true,
    },
];

impl ProfileSeed {
    fn build(&self) -> Profile {
        Profile {
            id: self.id,
            name: self.name.to_string(),
            age: self.age,
            location: self.location.to_string(),
            bio: self.bio.to_string(),
            photos: self.photos.iter().map(|p| unsplash(p)).collect(),
            interests: owned(&self.interests),
            values: owned(&self.values),
            compatibility_score: self.compatibility_score,
            premium: self.premium,
            icebreaker_answers: icebreaker_answers(),
            growth_goals: Some(growth_goals()),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn conversations() -> Vec<Conversation> {
    [
        (1, "Sarah", "Hey, how are you?", 2),
        (2, "Mike", "Want to grab coffee sometime?", 0),
        (3, "Emily", "That sounds great!", 1),
    ]
    .into_iter()
    .map(|(id, name, last_message, unread_count)| Conversation {
        id,
        name: name.to_string(),
        last_message: last_message.to_string(),
        unread_count,
    })
    .collect()
}

/// Fixed-data backend.
pub struct MockDataService {
    profiles: Vec<Profile>,
    conversations: Vec<Conversation>,
    sent: Mutex<Vec<(u32, Message)>>,
    verification_failure: Option<HeartlineError>,
    upgrade_failure: Option<HeartlineError>,
}

impl Default for MockDataService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataService {
    pub fn new() -> Self {
        Self {
            profiles: PROFILE_SEEDS.iter().map(ProfileSeed::build).collect(),
            conversations: conversations(),
            sent: Mutex::new(Vec::new()),
            verification_failure: None,
            upgrade_failure: None,
        }
    }

    /// Makes every verification submission fail with `err`.
    pub fn with_verification_failure(mut self, err: HeartlineError) -> Self {
        self.verification_failure = Some(err);
        self
    }

    /// Makes every subscription change fail with `err`.
    pub fn with_upgrade_failure(mut self, err: HeartlineError) -> Self {
        self.upgrade_failure = Some(err);
        self
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Messages delivered through `send_message`, oldest first.
    pub fn sent_messages(&self) -> Vec<(u32, Message)> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    fn conversation(&self, conversation_id: u32) -> Result<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| HeartlineError::not_found("conversation", conversation_id))
    }
}

#[async_trait]
impl CandidateSource for MockDataService {
    async fn fetch_profile(&self, id: u32) -> Result<Profile> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| HeartlineError::not_found("profile", id))
    }

    async fn fetch_candidate_queue(&self, count: usize) -> Result<Vec<Profile>> {
        Ok(self.profiles.iter().take(count).cloned().collect())
    }

    async fn random_profile(&self) -> Result<Profile> {
        self.profiles
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| HeartlineError::not_found("profile", "random"))
    }

    async fn fetch_growth_goals(&self) -> Result<Vec<GrowthGoal>> {
        Ok(growth_goals())
    }
}

#[async_trait]
impl ConversationRepository for MockDataService {
    async fn fetch_conversations(&self, user_id: &str) -> Result<Vec<Conversation>> {
        tracing::debug!(user_id, "Serving mock conversations");
        Ok(self.conversations.clone())
    }

    async fn fetch_messages(&self, conversation_id: u32) -> Result<Vec<Message>> {
        let peer = self.conversation(conversation_id)?.name.clone();
        let now = Utc::now();
        Ok(vec![
            Message::new(1, peer.as_str(), "Hey, how are you?", now - Duration::seconds(3600)),
            Message::new(
                2,
                OUTGOING_SENDER,
                "I'm doing great, thanks! How about you?",
                now - Duration::seconds(3500),
            ),
            Message::new(
                3,
                peer.as_str(),
                "I'm good too! Any plans for the weekend?",
                now - Duration::seconds(3400),
            ),
        ])
    }

    async fn send_message(&self, conversation_id: u32, message: &Message) -> Result<()> {
        self.conversation(conversation_id)?;
        let mut sent = self
            .sent
            .lock()
            .map_err(|e| HeartlineError::internal(format!("sent log poisoned: {e}")))?;
        sent.push((conversation_id, message.clone()));
        tracing::debug!(conversation_id, message_id = message.id, "Mock message delivered");
        Ok(())
    }
}

#[async_trait]
impl VerificationService for MockDataService {
    async fn submit_verification(
        &self,
        photos: &[PhotoUpload],
        personal_info: &PersonalInfo,
    ) -> Result<()> {
        tracing::info!(
            photos = photos.len(),
            name = %personal_info.name,
            "Verification data received"
        );
        match &self.verification_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SubscriptionService for MockDataService {
    async fn upgrade_subscription(&self, tier: Tier) -> Result<()> {
        tracing::info!(%tier, "Subscription change requested");
        match &self.upgrade_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
