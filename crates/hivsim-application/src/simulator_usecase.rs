//! Simulator use case implementation.
//!
//! `SimulatorUseCase` owns every piece of client state (session, approval
//! queue, mode switch, professional inputs, chart) and exposes one method per
//! user action. There are no globals: the presentation layer holds a single
//! instance for the lifetime of the process.

use std::sync::Arc;

use hivsim_core::approval::{ApprovalQueue, ApprovalRequest};
use hivsim_core::chart::{ChartSink, ChartUpdater, LineChart};
use hivsim_core::error::Result;
use hivsim_core::mode::{EffectiveMode, ModeSwitch};
use hivsim_core::session::{RoleStateMachine, Session, SessionContext, UpgradeOutcome};
use hivsim_core::simulation::{
    ProfessionalInputs, SimulationEngine, SimulationParameters, SimulationRequestBuilder,
};
use serde::Serialize;

/// Summary of a completed simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub mode: EffectiveMode,
    pub params: SimulationParameters,
    pub points: usize,
}

/// Coordinates the session role flow and simulation runs.
///
/// # Responsibilities
///
/// - Registration and the single active session
/// - Upgrade requests and the admin approval surface
/// - Professional-mode toggling, re-checked on every run
/// - Building, sending and rendering simulation requests
///
/// Every action takes `&mut self`, so a suspended simulation call can never
/// interleave with another state change.
pub struct SimulatorUseCase<S: ChartSink = LineChart> {
    sessions: SessionContext,
    approvals: ApprovalQueue,
    mode_switch: ModeSwitch,
    inputs: ProfessionalInputs,
    chart: S,
    engine: Arc<dyn SimulationEngine>,
}

impl SimulatorUseCase<LineChart> {
    /// Creates a use case rendering into an in-memory [`LineChart`].
    pub fn new(engine: Arc<dyn SimulationEngine>) -> Self {
        Self::with_chart(engine, LineChart::new())
    }
}

impl<S: ChartSink> SimulatorUseCase<S> {
    pub fn with_chart(engine: Arc<dyn SimulationEngine>, chart: S) -> Self {
        Self {
            sessions: SessionContext::new(),
            approvals: ApprovalQueue::new(),
            mode_switch: ModeSwitch::new(),
            inputs: ProfessionalInputs::default(),
            chart,
            engine,
        }
    }

    // ============================================================================
    // Session
    // ============================================================================

    /// Registers `identity` as the active session.
    ///
    /// A new registration starts from a clean slate: any queued request of a
    /// previous session is dropped and the mode switch is turned off.
    pub fn register(&mut self, identity: &str) -> Result<Session> {
        let session = self.sessions.register(identity)?.clone();
        self.approvals.clear();
        self.mode_switch.reset();
        Ok(session)
    }

    pub fn session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    // ============================================================================
    // Role upgrade and approval
    // ============================================================================

    pub fn request_upgrade(&mut self) -> Result<UpgradeOutcome> {
        RoleStateMachine::request_upgrade(&mut self.sessions, &mut self.approvals)
    }

    /// Requests currently awaiting an approver.
    pub fn pending_approvals(&self) -> Vec<ApprovalRequest> {
        self.approvals.pending()
    }

    pub fn approve(&mut self, identity: &str) -> Result<Session> {
        RoleStateMachine::approve(&mut self.sessions, &mut self.approvals, identity)
    }

    // ============================================================================
    // Mode and inputs
    // ============================================================================

    /// Applies a professional-mode toggle interaction.
    ///
    /// On refusal the switch is already back off when the error returns.
    pub fn set_professional_mode(&mut self, on: bool) -> Result<EffectiveMode> {
        let session = self.sessions.require()?;
        self.mode_switch.set(session, on)
    }

    pub fn is_professional_mode_on(&self) -> bool {
        self.mode_switch.is_on()
    }

    pub fn inputs(&self) -> &ProfessionalInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut ProfessionalInputs {
        &mut self.inputs
    }

    // ============================================================================
    // Simulation
    // ============================================================================

    /// Resolves the mode for this run and builds the request body.
    ///
    /// The mode is decided again from the current role, never from a cached
    /// decision.
    pub fn prepare_request(&mut self) -> Result<(EffectiveMode, SimulationParameters)> {
        let session = self.sessions.require()?;
        let mode = self.mode_switch.resolve(session);
        let params = SimulationRequestBuilder::build(mode, &self.inputs)?;
        Ok((mode, params))
    }

    /// Builds, sends and renders one simulation.
    ///
    /// On any failure the chart is left exactly as it was.
    pub async fn run_simulation(&mut self) -> Result<RunReport> {
        let (mode, params) = self.prepare_request()?;
        tracing::info!("[SimulatorUseCase] Running {} simulation", mode);

        let result = self.engine.simulate(&params).await?;
        let points = result.len();
        ChartUpdater::render(&mut self.chart, result);

        Ok(RunReport {
            mode,
            params,
            points,
        })
    }

    pub fn chart(&self) -> &S {
        &self.chart
    }
}
