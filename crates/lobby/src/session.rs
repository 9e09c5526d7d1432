//! # Session Module
//!
//! The placement session state machine driving fleet layout.
//!
//! ## States
//!
//! - **`Idle`** - no active ship; a required size may be selected
//! - **`Selecting`** - one active ship, fixed size, moved and rotated until committed
//!
//! `select_size` moves `Idle -> Selecting`; `commit` and `discard_all` move
//! back to `Idle`. Every transition returns `true` when it was applied and
//! `false` when it was refused, in which case nothing changed.

use crate::commands::PlacementCommand;
use crate::submission::GameSubmission;
use battleships_types::{
    can_place, cells_of, check_placement, validate_fleet, Direction, FleetManifest, GridSize,
    Orientation, PlacedShip, Position, ShipSpec,
};
use serde::Serialize;
use tracing::{debug, warn};

// ============================================================================
// SESSION TYPES
// ============================================================================

/// The ship being positioned, not yet committed
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ActiveShip {
    pub anchor: Position,
    pub spec: ShipSpec,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Selecting,
}

/// What the creation grid shows in one cell
///
/// # Variants
/// * `Empty` - Free water
/// * `Placed(usize)` - Part of the committed ship with that commit index
/// * `Active` - Part of the active ship (drawn over committed ships)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum GridMark {
    Empty,
    Placed(usize),
    Active,
}

/// Interactive fleet layout for one game creation
///
/// Holds the fleet manifest, the ships committed so far (in commit order)
/// and at most one active ship. Each required length is committed at most
/// once; the session is complete when all of them are.
///
/// # Fields
/// * `manifest` - Grid size and required ship lengths
/// * `placed` - Committed ships, in commit order
/// * `active` - Ship currently being positioned
#[derive(Debug, Clone, Serialize)]
pub struct PlacementSession {
    manifest: FleetManifest,
    placed: Vec<PlacedShip>,
    active: Option<ActiveShip>,
}

impl PlacementSession {
    pub fn new(manifest: FleetManifest) -> PlacementSession {
        PlacementSession {
            manifest,
            placed: Vec::new(),
            active: None,
        }
    }

    pub fn manifest(&self) -> &FleetManifest {
        &self.manifest
    }

    pub fn grid_size(&self) -> GridSize {
        self.manifest.grid_size()
    }

    pub fn placed(&self) -> &[PlacedShip] {
        &self.placed
    }

    pub fn active(&self) -> Option<&ActiveShip> {
        self.active.as_ref()
    }

    pub fn state(&self) -> SessionState {
        match self.active {
            Some(_) => SessionState::Selecting,
            None => SessionState::Idle,
        }
    }

    pub fn is_placed(&self, length: u8) -> bool {
        self.placed.iter().any(|ship| ship.length() == length)
    }

    /// Required sizes that can still be selected, in manifest order.
    ///
    /// Empty while a ship is active.
    pub fn available_sizes(&self) -> Vec<u8> {
        if self.active.is_some() {
            return Vec::new();
        }
        self.manifest
            .ship_sizes()
            .iter()
            .copied()
            .filter(|&length| !self.is_placed(length))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.placed.len() == self.manifest.len()
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Activates a ship of `length` at the origin, horizontal.
    pub fn select_size(&mut self, length: u8) -> bool {
        if self.active.is_some() {
            debug!(length, "select refused: a ship is already active");
            return false;
        }
        if !self.manifest.requires(length) {
            debug!(length, "select refused: size not in manifest");
            return false;
        }
        if self.is_placed(length) {
            debug!(length, "select refused: size already placed");
            return false;
        }
        let Ok(spec) = ShipSpec::new(length, Orientation::Horizontal) else {
            return false;
        };
        self.active = Some(ActiveShip {
            anchor: Position::ORIGIN,
            spec,
        });
        true
    }

    /// Shifts the active ship one cell in `direction`.
    ///
    /// Refused at the zero edge, past the far edge, or onto a committed ship.
    pub fn move_active(&mut self, direction: Direction) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let Some(anchor) = active.anchor.step(direction) else {
            debug!(?direction, "move refused: at grid edge");
            return false;
        };
        self.reposition(anchor, active.spec)
    }

    /// Jumps the active ship to `anchor`, keeping its orientation.
    pub fn move_to(&mut self, anchor: Position) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.reposition(anchor, active.spec)
    }

    /// Toggles the orientation of the active ship around its anchor.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.reposition(active.anchor, active.spec.flipped())
    }

    /// Whether [`commit`](Self::commit) would be applied right now.
    pub fn can_commit(&self) -> bool {
        match self.active {
            Some(active) => {
                !self.is_placed(active.spec.length)
                    && can_place(active.anchor, active.spec, &self.placed, self.grid_size())
            }
            None => false,
        }
    }

    /// Commits the active ship and returns to `Idle`.
    pub fn commit(&mut self) -> bool {
        if !self.can_commit() {
            debug!(active = ?self.active, "commit refused");
            return false;
        }
        let Some(active) = self.active.take() else {
            return false;
        };
        let id = self.placed.len();
        self.placed.push(PlacedShip::new(id, active.anchor, active.spec));
        true
    }

    /// Drops every committed ship and the active one.
    pub fn discard_all(&mut self) {
        self.placed.clear();
        self.active = None;
    }

    pub fn apply(&mut self, command: PlacementCommand) -> bool {
        match command {
            PlacementCommand::Select(length) => self.select_size(length),
            PlacementCommand::Move(direction) => self.move_active(direction),
            PlacementCommand::Rotate => self.rotate(),
            PlacementCommand::Commit => self.commit(),
            PlacementCommand::DiscardAll => {
                self.discard_all();
                true
            }
        }
    }

    fn reposition(&mut self, anchor: Position, spec: ShipSpec) -> bool {
        if let Err(reason) = check_placement(anchor, spec, &self.placed, self.grid_size()) {
            debug!(%anchor, ?spec, %reason, "placement refused");
            return false;
        }
        self.active = Some(ActiveShip { anchor, spec });
        true
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Row-major marks for every grid cell.
    pub fn render(&self) -> Vec<GridMark> {
        let grid = self.grid_size();
        let mut marks = vec![GridMark::Empty; grid.cell_count()];
        for ship in &self.placed {
            for cell in ship.cells() {
                if let Some(idx) = grid.index(cell) {
                    marks[idx] = GridMark::Placed(ship.id);
                }
            }
        }
        if let Some(active) = self.active {
            for cell in cells_of(active.anchor, active.spec) {
                if let Some(idx) = grid.index(cell) {
                    marks[idx] = GridMark::Active;
                }
            }
        }
        marks
    }

    /// The create-game payload, once every required size is committed.
    pub fn submission(&self, name: &str, cost: u128) -> Option<GameSubmission> {
        if !self.is_complete() {
            return None;
        }
        if let Err(reason) = validate_fleet(self.grid_size(), &self.placed) {
            warn!(%reason, "complete session failed fleet validation");
            return None;
        }
        Some(GameSubmission::new(
            self.grid_size(),
            name,
            self.placed.iter().map(PlacedShip::to_constructor).collect(),
            cost,
        ))
    }
}
