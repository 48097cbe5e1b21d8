use crate::core::validator;
use crate::domain::model::{FormFields, Outcome, SubmissionState};
use crate::domain::ports::{SilentView, SimulationApi, SubmissionView};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Drives one submission at a time: validate, call the service, report.
pub struct Orchestrator<A: SimulationApi> {
    api: A,
    state: Mutex<SubmissionState>,
    in_flight: AtomicBool,
}

fn lock_state(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Releases the in-flight mark when a submission ends or is dropped.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
    state: &'a Mutex<SubmissionState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock_state(self.state);
        if !state.is_terminal() {
            *state = SubmissionState::Idle;
        }
        self.in_flight.store(false, Ordering::Release);
    }
}

/// Tells the view the request is over, even when the submission is dropped.
struct BusyGuard<'a, V: SubmissionView + ?Sized> {
    view: &'a V,
}

impl<'a, V: SubmissionView + ?Sized> BusyGuard<'a, V> {
    fn start(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: SubmissionView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

impl<A: SimulationApi> Orchestrator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(SubmissionState::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> SubmissionState {
        *lock_state(&self.state)
    }

    fn set_state(&self, next: SubmissionState) {
        tracing::debug!("Submission state -> {:?}", next);
        *lock_state(&self.state) = next;
    }

    pub async fn check_health(&self) -> bool {
        self.api.check_health().await
    }

    pub async fn handle_submission(&self, fields: &FormFields) -> Outcome {
        self.submit(fields, &SilentView).await
    }

    pub async fn submit<V>(&self, fields: &FormFields, view: &V) -> Outcome
    where
        V: SubmissionView + ?Sized,
    {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("⚠️ Submission rejected: another simulation is still in flight");
            view.show_rejected();
            return Outcome::Busy;
        }
        let _guard = InFlightGuard {
            in_flight: &self.in_flight,
            state: &self.state,
        };

        tracing::info!("📊 Processing new simulation");
        view.clear();
        self.set_state(SubmissionState::Validating);

        let request = match validator::parse_request(fields) {
            Ok(request) => request,
            Err(errors) => {
                tracing::info!("Form has {} invalid field(s)", errors.len());
                self.set_state(SubmissionState::Invalid);
                view.show_field_errors(&errors);
                return Outcome::FieldErrors(errors);
            }
        };

        self.set_state(SubmissionState::RequestInFlight);
        let busy = BusyGuard::start(view);
        let response = self.api.submit(&request).await;
        drop(busy);

        match response {
            Ok(result) => {
                tracing::info!("✅ Simulation processed: {:?}", result);
                self.set_state(SubmissionState::Success);
                view.show_result(&result);
                Outcome::Success(result)
            }
            Err(error) => {
                tracing::error!("❌ Simulation failed: {}", error);
                self.set_state(SubmissionState::Failed);
                view.show_failure(&error);
                Outcome::ApiFailure(error)
            }
        }
    }
}
