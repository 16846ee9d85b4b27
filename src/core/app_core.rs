use crate::catalog::{StarCatalog, StarIndex};
use crate::config::Config;
use crate::core::actions::{build_keybind_map, KeyAction};
use crate::core::input_router::{route_input, InputContext};
use crate::core::state::{ConnectionStatus, DevotionState};
use crate::data::{Direction, InteractionMode, StarBoard, StarTooltip, UiState, UnlockCandidates};
use crate::network::{ApiRequest, ServerMessage};
use crate::widgets::ResultsPanelState;
use crossterm::event::{KeyEvent, MouseButton, MouseEventKind};
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;

/// Core application state (frontend-agnostic)
///
/// AppCore owns the board, the results panel and the session state. It turns
/// user actions into backend requests and applies backend answers; frontends
/// only read from it and feed it events.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Star layout
    pub catalog: StarCatalog,

    /// Per-star unlock state
    pub board: StarBoard,

    /// Stars currently shown as unlockable
    candidates: UnlockCandidates,

    /// Counters and connection status
    pub devotion: DevotionState,

    /// Mode, cursor and screen geometry
    pub ui_state: UiState,

    /// Results overlay
    pub results: ResultsPanelState,

    /// Tooltips received so far, per star
    tooltips: HashMap<StarIndex, StarTooltip>,

    /// Stars whose attributes were requested but not answered yet
    pending_tooltips: HashSet<StarIndex>,

    /// Parsed keybindings map (key combo -> action)
    pub keybind_map: HashMap<String, KeyAction>,

    /// Outbound requests to the backend task
    request_tx: mpsc::UnboundedSender<ApiRequest>,

    /// Application running flag
    pub running: bool,

    /// Set whenever state changed since the last frame
    pub needs_render: bool,
}

impl AppCore {
    pub fn new(
        config: Config,
        catalog: StarCatalog,
        request_tx: mpsc::UnboundedSender<ApiRequest>,
    ) -> Self {
        let board = StarBoard::new(&catalog);
        let keybind_map = build_keybind_map(&config.keybinds);
        let ui_state = UiState::new(config.ui.default_mode, config.ui.show_tooltips);

        Self {
            config,
            catalog,
            board,
            candidates: UnlockCandidates::new(),
            devotion: DevotionState::new(),
            ui_state,
            results: ResultsPanelState::new(),
            tooltips: HashMap::new(),
            pending_tooltips: HashSet::new(),
            keybind_map,
            request_tx,
            running: true,
            needs_render: true,
        }
    }

    pub fn candidates(&self) -> &UnlockCandidates {
        &self.candidates
    }

    pub fn tooltip(&self, star: StarIndex) -> Option<&StarTooltip> {
        self.tooltips.get(&star)
    }

    pub fn is_tooltip_loading(&self, star: StarIndex) -> bool {
        self.pending_tooltips.contains(&star)
    }

    /// Which surface has keyboard focus
    pub fn input_context(&self) -> InputContext {
        if self.results.open {
            InputContext::Results
        } else {
            InputContext::Board
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = route_input(key, self.input_context(), &self.keybind_map) {
            self.handle_action(action);
        }
    }

    /// Mouse input in terminal cells
    pub fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        if self.results.open {
            // The overlay covers the board; only its arrows are clickable
            if kind == MouseEventKind::Down(MouseButton::Left) {
                let arrows = self.ui_state.results_arrows;
                if arrows.next.is_some_and(|rect| rect.contains(x, y)) {
                    self.handle_action(KeyAction::NextColumn);
                } else if arrows.previous.is_some_and(|rect| rect.contains(x, y)) {
                    self.handle_action(KeyAction::PreviousColumn);
                }
            }
            return;
        }

        let Some(star) = self.star_under(x, y) else {
            return;
        };
        match kind {
            MouseEventKind::Moved => {
                if self.ui_state.cursor != Some(star) {
                    self.hover(star);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.hover(star);
                self.activate(star);
            }
            MouseEventKind::Down(MouseButton::Right) => {
                self.hover(star);
                self.lock(star);
            }
            _ => {}
        }
    }

    fn star_under(&self, x: u16, y: u16) -> Option<StarIndex> {
        let grid = self.ui_state.grid?;
        let (col, row) = grid.cell_at(x, y)?;
        self.catalog.star_at(col, row)
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveUp => self.move_cursor(Direction::Up),
            KeyAction::MoveDown => self.move_cursor(Direction::Down),
            KeyAction::MoveLeft => self.move_cursor(Direction::Left),
            KeyAction::MoveRight => self.move_cursor(Direction::Right),
            KeyAction::NextStar => self.cycle_cursor(true),
            KeyAction::PreviousStar => self.cycle_cursor(false),
            KeyAction::Activate => {
                if let Some(star) = self.ui_state.cursor {
                    self.activate(star);
                }
            }
            KeyAction::Lock => {
                if let Some(star) = self.ui_state.cursor {
                    self.lock(star);
                }
            }
            KeyAction::StandardMode => self.set_mode(InteractionMode::Standard),
            KeyAction::BlinkMode => self.set_mode(InteractionMode::Blink),
            KeyAction::Reset => {
                tracing::info!("Reset requested");
                self.send(ApiRequest::Reset);
            }
            KeyAction::ToggleResults => self.toggle_results(),
            KeyAction::NextColumn => {
                if self.results.open {
                    self.results.next_column();
                }
            }
            KeyAction::PreviousColumn => {
                if self.results.open {
                    self.results.previous_column();
                }
            }
            KeyAction::Close => self.results.close(),
            KeyAction::CopyResults => self.copy_results(),
            KeyAction::Quit => self.running = false,
        }
        self.needs_render = true;
    }

    fn move_cursor(&mut self, direction: Direction) {
        let next = match self.ui_state.cursor {
            Some(from) => StarBoard::neighbor(&self.catalog, from, direction),
            None => StarBoard::reading_order(&self.catalog).first().copied(),
        };
        if let Some(star) = next {
            self.hover(star);
        }
    }

    fn cycle_cursor(&mut self, forward: bool) {
        let order = StarBoard::reading_order(&self.catalog);
        if order.is_empty() {
            return;
        }
        let position = self
            .ui_state
            .cursor
            .and_then(|cursor| order.iter().position(|&star| star == cursor));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => order.len() - 1,
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
        };
        self.hover(order[next]);
    }

    /// Put the cursor on a star and fetch its tooltip if needed
    pub fn hover(&mut self, star: StarIndex) {
        self.ui_state.cursor = Some(star);
        self.needs_render = true;

        if !self.ui_state.show_tooltips
            || self.tooltips.contains_key(&star)
            || self.pending_tooltips.contains(&star)
        {
            return;
        }
        if let Some(key) = self.star_key(star) {
            if self.send(ApiRequest::Attributes { star: key }) {
                self.pending_tooltips.insert(star);
            }
        }
    }

    fn star_key(&self, star: StarIndex) -> Option<String> {
        self.catalog.star(star).map(|s| s.key.clone())
    }

    fn star_name(&self, star: StarIndex) -> String {
        self.catalog
            .star(star)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("star #{}", star))
    }

    /// Click on a star: unlock in standard mode, blink in blink mode
    pub fn activate(&mut self, star: StarIndex) {
        let Some(key) = self.star_key(star) else {
            return;
        };
        match self.ui_state.mode {
            InteractionMode::Idle => {
                self.ui_state
                    .set_status("Choose Standard or Blink mode first");
            }
            InteractionMode::Standard => {
                if self.board.is_unlocked(star) {
                    tracing::debug!("{} is already unlocked", key);
                    return;
                }
                self.send(ApiRequest::Unlock { star: key });
            }
            InteractionMode::Blink => {
                self.send(ApiRequest::Blink { star: key });
            }
        }
    }

    /// Lock a star; only unlocked stars in standard mode
    pub fn lock(&mut self, star: StarIndex) {
        if self.ui_state.mode != InteractionMode::Standard {
            tracing::debug!("Lock ignored in {} mode", self.ui_state.mode.label());
            return;
        }
        if !self.board.is_unlocked(star) {
            return;
        }
        if let Some(key) = self.star_key(star) {
            self.send(ApiRequest::Lock { star: key });
        }
    }

    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.ui_state.mode == mode {
            return;
        }
        tracing::info!(
            "Mode changed: {} -> {}",
            self.ui_state.mode.label(),
            mode.label()
        );
        self.ui_state.mode = mode;
        self.ui_state.set_status(format!("{} mode", mode.label()));
    }

    fn toggle_results(&mut self) {
        if self.results.open {
            self.results.close();
            return;
        }
        self.results.open();
        if !self.send(ApiRequest::Results) {
            self.results.loading = false;
        }
    }

    fn copy_results(&mut self) {
        if self.results.is_empty() {
            self.ui_state.set_status("No results to copy");
            return;
        }
        match crate::clipboard::copy_to_clipboard(&self.results.plain_text()) {
            Ok(()) => self.ui_state.set_status("Results copied to clipboard"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.ui_state.set_status(format!("Copy failed: {}", e));
            }
        }
    }

    /// Queue a request for the backend task
    fn send(&mut self, request: ApiRequest) -> bool {
        tracing::debug!("Queueing request: {}", request);
        match self.request_tx.send(request) {
            Ok(()) => {
                self.devotion.request_sent();
                true
            }
            Err(e) => {
                tracing::error!("Backend task stopped, dropping request: {}", e.0);
                self.ui_state.set_status("Backend task stopped");
                false
            }
        }
    }

    fn resolve_key(&self, key: &str) -> Option<StarIndex> {
        let index = self.catalog.index_of_key(key);
        if index.is_none() {
            tracing::warn!("Answer for unknown star key '{}'", key);
        }
        index
    }

    /// Apply a message from the backend task
    pub fn handle_server_message(&mut self, message: ServerMessage) {
        self.needs_render = true;
        match message {
            ServerMessage::Connected => {
                self.devotion.connection = ConnectionStatus::Connected;
                self.ui_state.set_status("Connected to devotion backend");
            }
            ServerMessage::Disconnected => {
                self.devotion.connection = ConnectionStatus::Disconnected;
                self.ui_state.set_status(format!(
                    "Backend unreachable at {}",
                    self.config.connection.base_url
                ));
            }
            ServerMessage::Unlocked { star, response } => {
                self.answer_received();
                self.devotion.update_counters(response.counters);
                let Some(index) = self.resolve_key(&star) else {
                    return;
                };
                let candidates = std::mem::take(&mut self.candidates);
                self.candidates =
                    self.board
                        .apply_standard_unlock(&self.catalog, index, &response, candidates);
                let name = self.star_name(index);
                if response.result {
                    self.ui_state.set_status(format!("Unlocked {}", name));
                } else {
                    self.ui_state.set_status(format!("Cannot unlock {}", name));
                }
            }
            ServerMessage::Locked { star, response } => {
                self.answer_received();
                self.devotion.update_counters(response.counters);
                let Some(index) = self.resolve_key(&star) else {
                    return;
                };
                let candidates = std::mem::take(&mut self.candidates);
                self.candidates =
                    self.board
                        .apply_standard_lock(&self.catalog, index, &response, candidates);
                let name = self.star_name(index);
                if response.result {
                    self.ui_state.set_status(format!("Cannot lock {}", name));
                } else {
                    self.ui_state.set_status(format!("Locked {}", name));
                }
            }
            ServerMessage::Blink(response) => {
                self.answer_received();
                self.devotion.update_counters(response.counters);
                let candidates = std::mem::take(&mut self.candidates);
                self.candidates = self.board.apply_blink(&self.catalog, &response, candidates);
                self.ui_state.set_status(format!(
                    "{} stars unlocked",
                    self.board.unlocked_count()
                ));
            }
            ServerMessage::Attributes { star, response } => {
                self.answer_received();
                let Some(index) = self.resolve_key(&star) else {
                    return;
                };
                self.pending_tooltips.remove(&index);
                let tooltip = StarTooltip::from_response(&response, &self.star_name(index));
                self.tooltips.insert(index, tooltip);
            }
            ServerMessage::Results(lines) => {
                self.answer_received();
                self.results.populate(lines);
            }
            ServerMessage::Reset(response) => {
                self.answer_received();
                self.devotion.update_counters(response.counters);
                let candidates = std::mem::take(&mut self.candidates);
                self.candidates = self.board.apply_reset(&response, candidates);
                if response.result.is_empty() {
                    tracing::info!("Board reset");
                    self.tooltips.clear();
                    self.ui_state.set_status("Board reset");
                    if self.results.open {
                        self.results.open();
                        if !self.send(ApiRequest::Results) {
                            self.results.loading = false;
                        }
                    }
                }
            }
            ServerMessage::RequestFailed { request, error } => {
                self.devotion.request_finished();
                match &request {
                    ApiRequest::Attributes { star } => {
                        if let Some(index) = self.catalog.index_of_key(star) {
                            self.pending_tooltips.remove(&index);
                        }
                    }
                    ApiRequest::Results => self.results.loading = false,
                    _ => {}
                }
                self.ui_state
                    .set_status(format!("Request '{}' failed: {}", request, error));
            }
        }
    }

    fn answer_received(&mut self) {
        self.devotion.request_finished();
        self.devotion.connection = ConnectionStatus::Connected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::data::{GridGeometry, ScreenRect, StarAppearance};
    use crate::protocol::{AttributesResponse, Counters, ResetResponse, StandardResponse};
    use crossterm::event::{KeyCode, KeyModifiers};

    const CSORD: StarIndex = 0;
    const TORTOF: StarIndex = 1;

    fn app() -> (AppCore, mpsc::UnboundedReceiver<ApiRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppCore::new(Config::default(), sample_catalog(), tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ApiRequest>) -> Vec<ApiRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = rx.try_recv() {
            requests.push(request);
        }
        requests
    }

    fn unlocked(result: bool, glow: &[&str], devpoints: i32) -> StandardResponse {
        StandardResponse {
            result,
            counters: Counters {
                order: 1,
                devpoints,
                ..Counters::default()
            },
            to_glow: glow.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn attributes() -> AttributesResponse {
        AttributesResponse {
            result: vec!["15 Physique".into(), "Crossroads".into()],
            first_affinity: None,
            first_affinity_value: None,
            second_affinity: None,
            second_affinity_value: None,
            third_affinity: None,
            third_affinity_value: None,
            first_bonus: None,
            first_bonus_value: None,
            second_bonus: None,
            second_bonus_value: None,
        }
    }

    #[test]
    fn test_idle_mode_ignores_clicks() {
        let (mut app, mut rx) = app();
        app.ui_state.show_tooltips = false;
        app.hover(CSORD);
        app.handle_action(KeyAction::Activate);
        assert!(drain(&mut rx).is_empty());
        assert_eq!(app.ui_state.mode, InteractionMode::Idle);
    }

    #[test]
    fn test_standard_unlock_flow() {
        let (mut app, mut rx) = app();
        app.ui_state.show_tooltips = false;
        app.set_mode(InteractionMode::Standard);
        app.hover(CSORD);
        app.handle_action(KeyAction::Activate);
        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::Unlock {
                star: "csord".into()
            }]
        );

        app.handle_server_message(ServerMessage::Unlocked {
            star: "csord".into(),
            response: unlocked(true, &["FirstTortoiseStar"], 54),
        });
        assert!(app.board.is_unlocked(CSORD));
        assert_eq!(app.board.appearance(TORTOF), StarAppearance::Unlockable);
        assert!(app.candidates().contains(TORTOF));
        assert_eq!(app.devotion.counters.devpoints, 54);
        assert!(!app.devotion.is_busy());

        // Already unlocked: no second request
        app.handle_action(KeyAction::Activate);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_lock_only_unlocked_stars() {
        let (mut app, mut rx) = app();
        app.ui_state.show_tooltips = false;
        app.set_mode(InteractionMode::Standard);

        app.lock(TORTOF);
        assert!(drain(&mut rx).is_empty());

        app.handle_server_message(ServerMessage::Unlocked {
            star: "csord".into(),
            response: unlocked(true, &[], 54),
        });
        app.lock(CSORD);
        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::Lock {
                star: "csord".into()
            }]
        );

        app.handle_server_message(ServerMessage::Locked {
            star: "csord".into(),
            response: unlocked(false, &["CrossroadsOfOrder"], 55),
        });
        assert_eq!(app.board.appearance(CSORD), StarAppearance::Unlockable);
    }

    #[test]
    fn test_blink_mode() {
        let (mut app, mut rx) = app();
        app.ui_state.show_tooltips = false;
        app.set_mode(InteractionMode::Blink);

        app.lock(CSORD);
        assert!(drain(&mut rx).is_empty());

        app.activate(TORTOF);
        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::Blink {
                star: "tortof".into()
            }]
        );
    }

    #[test]
    fn test_same_mode_is_noop() {
        let (mut app, _rx) = app();
        app.set_mode(InteractionMode::Standard);
        app.ui_state.set_status("unchanged");
        app.handle_action(KeyAction::StandardMode);
        assert_eq!(app.ui_state.status_text, "unchanged");
    }

    #[test]
    fn test_tooltip_requested_once() {
        let (mut app, mut rx) = app();
        app.hover(CSORD);
        app.hover(CSORD);
        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::Attributes {
                star: "csord".into()
            }]
        );
        assert!(app.is_tooltip_loading(CSORD));

        app.handle_server_message(ServerMessage::Attributes {
            star: "csord".into(),
            response: attributes(),
        });
        assert!(!app.is_tooltip_loading(CSORD));
        assert_eq!(app.tooltip(CSORD).unwrap().name, "Crossroads");

        app.hover(TORTOF);
        app.hover(CSORD);
        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::Attributes {
                star: "tortof".into()
            }]
        );
    }

    #[test]
    fn test_reset_clears_tooltips() {
        let (mut app, mut rx) = app();
        app.hover(CSORD);
        app.handle_server_message(ServerMessage::Attributes {
            star: "csord".into(),
            response: attributes(),
        });
        drain(&mut rx);

        app.handle_action(KeyAction::Reset);
        assert_eq!(drain(&mut rx), vec![ApiRequest::Reset]);

        app.handle_server_message(ServerMessage::Reset(ResetResponse {
            result: Vec::new(),
            counters: Counters {
                devpoints: 55,
                ..Counters::default()
            },
        }));
        assert!(app.tooltip(CSORD).is_none());
        assert_eq!(app.ui_state.status_text, "Board reset");
    }

    #[test]
    fn test_reset_refreshes_open_results() {
        let (mut app, mut rx) = app();
        app.handle_action(KeyAction::ToggleResults);
        app.handle_server_message(ServerMessage::Results(vec!["+15 Physique".into()]));
        drain(&mut rx);
        assert!(!app.results.loading);

        app.handle_server_message(ServerMessage::Reset(ResetResponse {
            result: Vec::new(),
            counters: Counters {
                devpoints: 55,
                ..Counters::default()
            },
        }));
        assert!(app.results.open);
        assert!(app.results.loading);
        assert_eq!(drain(&mut rx), vec![ApiRequest::Results]);
    }

    #[test]
    fn test_incomplete_reset_keeps_board() {
        let (mut app, mut rx) = app();
        app.ui_state.show_tooltips = false;
        app.handle_server_message(ServerMessage::Unlocked {
            star: "csord".into(),
            response: unlocked(true, &["FirstTortoiseStar"], 54),
        });

        app.handle_server_message(ServerMessage::Reset(ResetResponse {
            result: vec!["CrossroadsOfOrder".into()],
            counters: Counters {
                order: 1,
                devpoints: 54,
                ..Counters::default()
            },
        }));
        assert!(app.board.is_unlocked(CSORD));
        assert_eq!(app.board.appearance(TORTOF), StarAppearance::Unlockable);
        assert!(app.candidates().contains(TORTOF));
        assert_ne!(app.ui_state.status_text, "Board reset");
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_results_panel_paging() {
        let (mut app, mut rx) = app();
        app.handle_action(KeyAction::ToggleResults);
        assert!(app.results.open);
        assert!(app.results.loading);
        assert_eq!(drain(&mut rx), vec![ApiRequest::Results]);

        let lines = (0..30).map(|i| format!("+{} Physique", i)).collect();
        app.handle_server_message(ServerMessage::Results(lines));
        assert!(!app.results.loading);
        assert_eq!(app.results.page_label(), "1/3");

        app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(app.results.page_label(), "2/3");
        app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(app.results.page_label(), "3/3");

        // Board actions are swallowed while the panel is open
        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert!(app.ui_state.cursor.is_none());

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.results.open);
    }

    #[test]
    fn test_results_arrow_click() {
        let (mut app, _rx) = app();
        app.handle_action(KeyAction::ToggleResults);
        app.handle_server_message(ServerMessage::Results(
            (0..20).map(|i| i.to_string()).collect(),
        ));
        app.ui_state.results_arrows.next = Some(ScreenRect::new(50, 3, 3, 1));

        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 51, 3);
        assert_eq!(app.results.page_label(), "2/2");
    }

    #[test]
    fn test_mouse_click_on_star() {
        let (mut app, mut rx) = app();
        app.ui_state.show_tooltips = false;
        app.set_mode(InteractionMode::Standard);
        app.ui_state.grid = Some(GridGeometry {
            area: ScreenRect::new(0, 0, 20, 5),
            cell_width: 2,
        });

        // Column 2 row 0 is drawn at x = 4
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 4, 0);
        assert_eq!(app.ui_state.cursor, Some(TORTOF));
        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::Unlock {
                star: "tortof".into()
            }]
        );

        // Empty cell
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 2, 0);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_keyboard_navigation() {
        let (mut app, _rx) = app();
        app.ui_state.show_tooltips = false;
        app.handle_action(KeyAction::MoveRight);
        assert_eq!(app.ui_state.cursor, Some(CSORD));
        app.handle_action(KeyAction::MoveRight);
        assert_eq!(app.ui_state.cursor, Some(TORTOF));
        app.handle_action(KeyAction::PreviousStar);
        assert_eq!(app.ui_state.cursor, Some(CSORD));
        app.handle_action(KeyAction::PreviousStar);
        assert_eq!(app.ui_state.cursor, Some(3));
    }

    #[test]
    fn test_request_failure_clears_pending() {
        let (mut app, _rx) = app();
        app.hover(CSORD);
        app.handle_server_message(ServerMessage::RequestFailed {
            request: ApiRequest::Attributes {
                star: "csord".into(),
            },
            error: "timed out".into(),
        });
        assert!(!app.is_tooltip_loading(CSORD));
        assert!(app.ui_state.status_text.contains("timed out"));
    }

    #[test]
    fn test_quit() {
        let (mut app, _rx) = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.running);
    }
}
