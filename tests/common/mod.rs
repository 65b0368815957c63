//! Shared test helpers and fake providers.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use fitgenie::error::FitError;
use fitgenie::plan::PlanProvider;
use fitgenie::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use fitgenie::types::*;

/// Model reply used by the Asha scenarios.
pub const ASHA_PLAN_JSON: &str = r#"{"bmi":22.0,"bmiCategory":"Normal","dailyCalories":1800,"macroSplit":[{"protein":30,"carbs":45,"fats":25}],"dietPlan":[{"type":"Breakfast","name":"Poha","calories":300,"description":"..."}],"workoutPlan":[{"day":"Day 1","focus":"Legs","exercises":[{"name":"Squat","sets":"3","reps":"12"}]}],"summary":"Stay consistent."}"#;

pub fn asha_profile() -> UserProfile {
    UserProfile::builder()
        .name("Asha")
        .age(22)
        .weight(60.0)
        .height(165.0)
        .goal(FitnessGoal::FatLoss)
        .preference(DietaryPreference::Vegetarian)
        .build()
}

pub fn asha_plan() -> GeneratedPlan {
    serde_json::from_str(ASHA_PLAN_JSON).unwrap()
}

/// Scripted outcome for [`FakePlanProvider`].
pub enum Scripted {
    Plan(GeneratedPlan),
    EmptyResponse,
    Api(u16),
}

/// A plan provider that returns a scripted outcome and records every call.
pub struct FakePlanProvider {
    outcome: Scripted,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    profiles: Mutex<Vec<UserProfile>>,
}

impl FakePlanProvider {
    pub fn new(outcome: Scripted) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            profiles: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn profiles(&self) -> Vec<UserProfile> {
        self.profiles.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanProvider for FakePlanProvider {
    async fn generate_plan(&self, profile: &UserProfile) -> Result<GeneratedPlan, FitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.profiles.lock().unwrap().push(profile.clone());

        tokio::task::yield_now().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match &self.outcome {
            Scripted::Plan(plan) => Ok(plan.clone()),
            Scripted::EmptyResponse => Err(FitError::EmptyResponse),
            Scripted::Api(status) => Err(FitError::api(*status, "scripted failure")),
        }
    }
}

/// A model provider that captures requests and returns queued responses.
pub struct CaptureProvider {
    responses: Mutex<Vec<Result<ProviderResponse, FitError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl CaptureProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a text response that finished normally.
    pub fn queue_text(&self, text: &str) {
        self.queue_reply(text, FinishReason::Stop);
    }

    /// Queue a text response with an explicit finish reason.
    pub fn queue_reply(&self, text: &str, finish_reason: FinishReason) {
        self.responses.lock().unwrap().push(Ok(ProviderResponse {
            text: text.to_string(),
            finish_reason: Some(finish_reason),
        }));
    }

    /// Queue a transport failure.
    pub fn queue_error(&self, err: FitError) {
        self.responses.lock().unwrap().push(Err(err));
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelProvider for CaptureProvider {
    fn provider_name(&self) -> &str {
        "capture"
    }

    fn model_id(&self) -> &str {
        "capture-model"
    }

    async fn generate_text(&self, request: &ProviderRequest) -> Result<ProviderResponse, FitError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(ProviderResponse::default());
        }
        responses.remove(0)
    }
}
