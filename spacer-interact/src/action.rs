//! The interaction state.
//!
//! Exactly one [`Action`] is current at a time. Every event replaces it
//! wholesale with the next one; nothing patches it in place.
//!
//! Variant names read as `<activity><target>[WhileSelecting]`:
//!
//! - `Placing*` previews an element that does not exist yet.
//! - `Hovering*` has the cursor over an existing element.
//! - `Touching*` has the button down on an element, before it is known
//!   whether this is a click (toggle selection) or the start of a drag.
//! - `Dragging*` moves lines; the scene is updated on every move.
//! - `Create*` is emitted once on release and consumed by
//!   [`apply_action`](crate::apply_action).
//! - `*Selected*WhileSelecting` means the target is itself in the selection.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use spacer_core::{Axis, ElementId, Position, Selection};

/// One horizontal and one vertical line meeting at a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossingLines {
    /// The horizontal line.
    pub horizontal: ElementId,
    /// The vertical line.
    pub vertical: ElementId,
}

impl CrossingLines {
    /// Both ids, horizontal first.
    #[must_use]
    pub const fn ids(&self) -> [ElementId; 2] {
        [self.horizontal, self.vertical]
    }
}

/// The current interaction.
///
/// Fields:
///
/// - `at`: latest (grid-snapped) cursor position.
/// - `line` / `point`: the targeted line or intersection.
/// - `lines`: the two lines of a crossing.
/// - `axis`: orientation of a line being placed.
/// - `selection`: the selected lines and points.
/// - `element`: an id hovered outside the canvas; its kind is not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
#[allow(missing_docs)] // Variant fields documented on the enum
pub enum Action {
    /// Idle; the cursor is not on the canvas.
    #[default]
    None,
    /// Cursor on the canvas with nothing under it.
    Interacting { at: Position },
    /// A selection exists and nothing is under the cursor.
    Selecting { selection: Selection, at: Position },

    /// Create a line on release.
    CreateLine { axis: Axis, at: Position },
    /// Create an intersection at a free position on release.
    CreateIntersection { at: Position },
    /// Create an intersection on an existing line on release.
    CreateIntersectionAlongLine { line: ElementId, at: Position },
    /// Create an intersection where two existing lines cross.
    CreateIntersectionAtIntersection { lines: CrossingLines },

    /// Previewing a new line.
    PlacingLine { axis: Axis, at: Position },
    /// Previewing a new intersection at a free position.
    PlacingIntersection { at: Position },
    /// Previewing a new intersection on an existing line.
    PlacingIntersectionAlongLine { line: ElementId, at: Position },
    /// Previewing a new intersection on an existing crossing.
    PlacingIntersectionAtIntersection { lines: CrossingLines, at: Position },

    /// Cursor over a line.
    HoveringLine { line: ElementId, at: Position },
    /// Cursor over an unselected line while a selection exists.
    HoveringLineWhileSelecting {
        line: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Cursor over a selected line.
    HoveringSelectedLineWhileSelecting {
        line: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Cursor over an intersection.
    HoveringIntersection { point: ElementId, at: Position },
    /// Cursor over an unselected intersection while a selection exists.
    HoveringIntersectionWhileSelecting {
        point: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Cursor over a selected intersection.
    HoveringSelectedIntersectionWhileSelecting {
        point: ElementId,
        selection: Selection,
        at: Position,
    },

    /// Button down on a line.
    TouchingLine { line: ElementId, at: Position },
    /// Button down on an unselected line while a selection exists.
    TouchingLineWhileSelecting {
        line: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Button down on a selected line.
    TouchingSelectedLineWhileSelecting {
        line: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Button down on an intersection.
    TouchingIntersection { point: ElementId, at: Position },
    /// Button down on an unselected intersection while a selection exists.
    TouchingIntersectionWhileSelecting {
        point: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Button down on a selected intersection.
    TouchingSelectedIntersectionWhileSelecting {
        point: ElementId,
        selection: Selection,
        at: Position,
    },

    /// Dragging a line.
    DraggingLine { line: ElementId, at: Position },
    /// Dragging an unselected line; the selection is kept.
    DraggingLineWhileSelecting {
        line: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Dragging an intersection, i.e. both of its lines.
    DraggingIntersection {
        point: ElementId,
        lines: CrossingLines,
        at: Position,
    },
    /// Dragging an unselected intersection; the selection is kept.
    DraggingIntersectionWhileSelecting {
        point: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Dragging the whole selection by one of its lines.
    DraggingSelectionByLine {
        line: ElementId,
        selection: Selection,
        at: Position,
    },
    /// Dragging the whole selection by one of its intersections.
    DraggingSelectionByPoint {
        point: ElementId,
        selection: Selection,
        at: Position,
    },

    /// An element hovered from outside the canvas.
    UiHoveringElement { element: ElementId },
    /// An element hovered from outside the canvas while a selection exists.
    UiHoveringElementWhileSelecting {
        element: ElementId,
        selection: Selection,
        at: Position,
    },
}

/// Fieldless mirror of [`Action`]'s variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)] // Mirrors the documented `Action` variants
pub enum ActionKind {
    None,
    Interacting,
    Selecting,
    CreateLine,
    CreateIntersection,
    CreateIntersectionAlongLine,
    CreateIntersectionAtIntersection,
    PlacingLine,
    PlacingIntersection,
    PlacingIntersectionAlongLine,
    PlacingIntersectionAtIntersection,
    HoveringLine,
    HoveringLineWhileSelecting,
    HoveringSelectedLineWhileSelecting,
    HoveringIntersection,
    HoveringIntersectionWhileSelecting,
    HoveringSelectedIntersectionWhileSelecting,
    TouchingLine,
    TouchingLineWhileSelecting,
    TouchingSelectedLineWhileSelecting,
    TouchingIntersection,
    TouchingIntersectionWhileSelecting,
    TouchingSelectedIntersectionWhileSelecting,
    DraggingLine,
    DraggingLineWhileSelecting,
    DraggingIntersection,
    DraggingIntersectionWhileSelecting,
    DraggingSelectionByLine,
    DraggingSelectionByPoint,
    UiHoveringElement,
    UiHoveringElementWhileSelecting,
}

impl ActionKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 31] = [
        Self::None,
        Self::Interacting,
        Self::Selecting,
        Self::CreateLine,
        Self::CreateIntersection,
        Self::CreateIntersectionAlongLine,
        Self::CreateIntersectionAtIntersection,
        Self::PlacingLine,
        Self::PlacingIntersection,
        Self::PlacingIntersectionAlongLine,
        Self::PlacingIntersectionAtIntersection,
        Self::HoveringLine,
        Self::HoveringLineWhileSelecting,
        Self::HoveringSelectedLineWhileSelecting,
        Self::HoveringIntersection,
        Self::HoveringIntersectionWhileSelecting,
        Self::HoveringSelectedIntersectionWhileSelecting,
        Self::TouchingLine,
        Self::TouchingLineWhileSelecting,
        Self::TouchingSelectedLineWhileSelecting,
        Self::TouchingIntersection,
        Self::TouchingIntersectionWhileSelecting,
        Self::TouchingSelectedIntersectionWhileSelecting,
        Self::DraggingLine,
        Self::DraggingLineWhileSelecting,
        Self::DraggingIntersection,
        Self::DraggingIntersectionWhileSelecting,
        Self::DraggingSelectionByLine,
        Self::DraggingSelectionByPoint,
        Self::UiHoveringElement,
        Self::UiHoveringElementWhileSelecting,
    ];

    /// The variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Interacting => "Interacting",
            Self::Selecting => "Selecting",
            Self::CreateLine => "CreateLine",
            Self::CreateIntersection => "CreateIntersection",
            Self::CreateIntersectionAlongLine => "CreateIntersectionAlongLine",
            Self::CreateIntersectionAtIntersection => "CreateIntersectionAtIntersection",
            Self::PlacingLine => "PlacingLine",
            Self::PlacingIntersection => "PlacingIntersection",
            Self::PlacingIntersectionAlongLine => "PlacingIntersectionAlongLine",
            Self::PlacingIntersectionAtIntersection => "PlacingIntersectionAtIntersection",
            Self::HoveringLine => "HoveringLine",
            Self::HoveringLineWhileSelecting => "HoveringLineWhileSelecting",
            Self::HoveringSelectedLineWhileSelecting => "HoveringSelectedLineWhileSelecting",
            Self::HoveringIntersection => "HoveringIntersection",
            Self::HoveringIntersectionWhileSelecting => "HoveringIntersectionWhileSelecting",
            Self::HoveringSelectedIntersectionWhileSelecting => {
                "HoveringSelectedIntersectionWhileSelecting"
            }
            Self::TouchingLine => "TouchingLine",
            Self::TouchingLineWhileSelecting => "TouchingLineWhileSelecting",
            Self::TouchingSelectedLineWhileSelecting => "TouchingSelectedLineWhileSelecting",
            Self::TouchingIntersection => "TouchingIntersection",
            Self::TouchingIntersectionWhileSelecting => "TouchingIntersectionWhileSelecting",
            Self::TouchingSelectedIntersectionWhileSelecting => {
                "TouchingSelectedIntersectionWhileSelecting"
            }
            Self::DraggingLine => "DraggingLine",
            Self::DraggingLineWhileSelecting => "DraggingLineWhileSelecting",
            Self::DraggingIntersection => "DraggingIntersection",
            Self::DraggingIntersectionWhileSelecting => "DraggingIntersectionWhileSelecting",
            Self::DraggingSelectionByLine => "DraggingSelectionByLine",
            Self::DraggingSelectionByPoint => "DraggingSelectionByPoint",
            Self::UiHoveringElement => "UiHoveringElement",
            Self::UiHoveringElementWhileSelecting => "UiHoveringElementWhileSelecting",
        }
    }

    /// Whether actions of this kind change the scene when applied.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::CreateLine
                | Self::CreateIntersection
                | Self::CreateIntersectionAlongLine
                | Self::CreateIntersectionAtIntersection
                | Self::DraggingLine
                | Self::DraggingLineWhileSelecting
                | Self::DraggingIntersection
                | Self::DraggingIntersectionWhileSelecting
                | Self::DraggingSelectionByLine
                | Self::DraggingSelectionByPoint
        )
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every id an action mentions, grouped by what it is known to be.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencedElements {
    /// Line ids.
    pub lines: BTreeSet<ElementId>,
    /// Intersection ids.
    pub points: BTreeSet<ElementId>,
    /// Ids hovered from outside the canvas, of unchecked kind.
    pub unknown: BTreeSet<ElementId>,
}

impl ReferencedElements {
    /// Whether any group holds `id`.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.lines.contains(&id) || self.points.contains(&id) || self.unknown.contains(&id)
    }

    /// Whether every group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty() && self.unknown.is_empty()
    }
}

impl Action {
    /// The variant of this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::None => ActionKind::None,
            Self::Interacting { .. } => ActionKind::Interacting,
            Self::Selecting { .. } => ActionKind::Selecting,
            Self::CreateLine { .. } => ActionKind::CreateLine,
            Self::CreateIntersection { .. } => ActionKind::CreateIntersection,
            Self::CreateIntersectionAlongLine { .. } => ActionKind::CreateIntersectionAlongLine,
            Self::CreateIntersectionAtIntersection { .. } => {
                ActionKind::CreateIntersectionAtIntersection
            }
            Self::PlacingLine { .. } => ActionKind::PlacingLine,
            Self::PlacingIntersection { .. } => ActionKind::PlacingIntersection,
            Self::PlacingIntersectionAlongLine { .. } => ActionKind::PlacingIntersectionAlongLine,
            Self::PlacingIntersectionAtIntersection { .. } => {
                ActionKind::PlacingIntersectionAtIntersection
            }
            Self::HoveringLine { .. } => ActionKind::HoveringLine,
            Self::HoveringLineWhileSelecting { .. } => ActionKind::HoveringLineWhileSelecting,
            Self::HoveringSelectedLineWhileSelecting { .. } => {
                ActionKind::HoveringSelectedLineWhileSelecting
            }
            Self::HoveringIntersection { .. } => ActionKind::HoveringIntersection,
            Self::HoveringIntersectionWhileSelecting { .. } => {
                ActionKind::HoveringIntersectionWhileSelecting
            }
            Self::HoveringSelectedIntersectionWhileSelecting { .. } => {
                ActionKind::HoveringSelectedIntersectionWhileSelecting
            }
            Self::TouchingLine { .. } => ActionKind::TouchingLine,
            Self::TouchingLineWhileSelecting { .. } => ActionKind::TouchingLineWhileSelecting,
            Self::TouchingSelectedLineWhileSelecting { .. } => {
                ActionKind::TouchingSelectedLineWhileSelecting
            }
            Self::TouchingIntersection { .. } => ActionKind::TouchingIntersection,
            Self::TouchingIntersectionWhileSelecting { .. } => {
                ActionKind::TouchingIntersectionWhileSelecting
            }
            Self::TouchingSelectedIntersectionWhileSelecting { .. } => {
                ActionKind::TouchingSelectedIntersectionWhileSelecting
            }
            Self::DraggingLine { .. } => ActionKind::DraggingLine,
            Self::DraggingLineWhileSelecting { .. } => ActionKind::DraggingLineWhileSelecting,
            Self::DraggingIntersection { .. } => ActionKind::DraggingIntersection,
            Self::DraggingIntersectionWhileSelecting { .. } => {
                ActionKind::DraggingIntersectionWhileSelecting
            }
            Self::DraggingSelectionByLine { .. } => ActionKind::DraggingSelectionByLine,
            Self::DraggingSelectionByPoint { .. } => ActionKind::DraggingSelectionByPoint,
            Self::UiHoveringElement { .. } => ActionKind::UiHoveringElement,
            Self::UiHoveringElementWhileSelecting { .. } => {
                ActionKind::UiHoveringElementWhileSelecting
            }
        }
    }

    /// Cursor position, if this kind tracks one.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::None
            | Self::CreateIntersectionAtIntersection { .. }
            | Self::UiHoveringElement { .. } => None,
            Self::Interacting { at }
            | Self::Selecting { at, .. }
            | Self::CreateLine { at, .. }
            | Self::CreateIntersection { at }
            | Self::CreateIntersectionAlongLine { at, .. }
            | Self::PlacingLine { at, .. }
            | Self::PlacingIntersection { at }
            | Self::PlacingIntersectionAlongLine { at, .. }
            | Self::PlacingIntersectionAtIntersection { at, .. }
            | Self::HoveringLine { at, .. }
            | Self::HoveringLineWhileSelecting { at, .. }
            | Self::HoveringSelectedLineWhileSelecting { at, .. }
            | Self::HoveringIntersection { at, .. }
            | Self::HoveringIntersectionWhileSelecting { at, .. }
            | Self::HoveringSelectedIntersectionWhileSelecting { at, .. }
            | Self::TouchingLine { at, .. }
            | Self::TouchingLineWhileSelecting { at, .. }
            | Self::TouchingSelectedLineWhileSelecting { at, .. }
            | Self::TouchingIntersection { at, .. }
            | Self::TouchingIntersectionWhileSelecting { at, .. }
            | Self::TouchingSelectedIntersectionWhileSelecting { at, .. }
            | Self::DraggingLine { at, .. }
            | Self::DraggingLineWhileSelecting { at, .. }
            | Self::DraggingIntersection { at, .. }
            | Self::DraggingIntersectionWhileSelecting { at, .. }
            | Self::DraggingSelectionByLine { at, .. }
            | Self::DraggingSelectionByPoint { at, .. }
            | Self::UiHoveringElementWhileSelecting { at, .. } => Some(*at),
        }
    }

    /// Cursor x, if tracked.
    #[must_use]
    pub const fn x(&self) -> Option<f64> {
        match self.position() {
            Some(p) => Some(p.x),
            None => None,
        }
    }

    /// Cursor y, if tracked.
    #[must_use]
    pub const fn y(&self) -> Option<f64> {
        match self.position() {
            Some(p) => Some(p.y),
            None => None,
        }
    }

    /// The selection carried by this action, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Selecting { selection, .. }
            | Self::HoveringLineWhileSelecting { selection, .. }
            | Self::HoveringSelectedLineWhileSelecting { selection, .. }
            | Self::HoveringIntersectionWhileSelecting { selection, .. }
            | Self::HoveringSelectedIntersectionWhileSelecting { selection, .. }
            | Self::TouchingLineWhileSelecting { selection, .. }
            | Self::TouchingSelectedLineWhileSelecting { selection, .. }
            | Self::TouchingIntersectionWhileSelecting { selection, .. }
            | Self::TouchingSelectedIntersectionWhileSelecting { selection, .. }
            | Self::DraggingLineWhileSelecting { selection, .. }
            | Self::DraggingIntersectionWhileSelecting { selection, .. }
            | Self::DraggingSelectionByLine { selection, .. }
            | Self::DraggingSelectionByPoint { selection, .. }
            | Self::UiHoveringElementWhileSelecting { selection, .. } => Some(selection),
            _ => None,
        }
    }

    /// Whether the scene writer acts on this action.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.kind().is_terminal()
    }

    fn target(&self) -> Target {
        match self {
            Self::CreateIntersectionAlongLine { line, .. }
            | Self::PlacingIntersectionAlongLine { line, .. }
            | Self::HoveringLine { line, .. }
            | Self::HoveringLineWhileSelecting { line, .. }
            | Self::HoveringSelectedLineWhileSelecting { line, .. }
            | Self::TouchingLine { line, .. }
            | Self::TouchingLineWhileSelecting { line, .. }
            | Self::TouchingSelectedLineWhileSelecting { line, .. }
            | Self::DraggingSelectionByLine { line, .. } => Target::Hovered(Refs::line(*line)),
            Self::CreateIntersectionAtIntersection { lines }
            | Self::PlacingIntersectionAtIntersection { lines, .. } => {
                Target::Hovered(Refs::crossing(*lines))
            }
            Self::HoveringIntersection { point, .. }
            | Self::HoveringIntersectionWhileSelecting { point, .. }
            | Self::HoveringSelectedIntersectionWhileSelecting { point, .. }
            | Self::TouchingIntersection { point, .. }
            | Self::TouchingIntersectionWhileSelecting { point, .. }
            | Self::TouchingSelectedIntersectionWhileSelecting { point, .. }
            | Self::DraggingSelectionByPoint { point, .. } => Target::Hovered(Refs::point(*point)),
            Self::UiHoveringElement { element }
            | Self::UiHoveringElementWhileSelecting { element, .. } => Target::Ui(*element),
            Self::DraggingLine { line, .. } | Self::DraggingLineWhileSelecting { line, .. } => {
                Target::Dragged(Refs::line(*line))
            }
            Self::DraggingIntersectionWhileSelecting { point, .. } => {
                Target::Dragged(Refs::point(*point))
            }
            Self::DraggingIntersection { point, lines, .. } => Target::Dragged(Refs {
                lines: lines.ids().to_vec(),
                points: vec![*point],
            }),
            Self::None
            | Self::Interacting { .. }
            | Self::Selecting { .. }
            | Self::CreateLine { .. }
            | Self::CreateIntersection { .. }
            | Self::PlacingLine { .. }
            | Self::PlacingIntersection { .. } => Target::Nothing,
        }
    }

    /// Ids under the cursor or hovered from the UI.
    #[must_use]
    pub fn hovered_elements(&self) -> Vec<ElementId> {
        match self.target() {
            Target::Hovered(refs) => refs.all(),
            Target::Ui(id) => vec![id],
            Target::Dragged(_) | Target::Nothing => Vec::new(),
        }
    }

    /// Ids in the carried selection, lines first.
    #[must_use]
    pub fn selected_elements(&self) -> Vec<ElementId> {
        self.selection()
            .map(|s| s.lines.iter().chain(&s.points).copied().collect())
            .unwrap_or_default()
    }

    /// Ids being dragged.
    #[must_use]
    pub fn dragged_elements(&self) -> Vec<ElementId> {
        match self.target() {
            Target::Dragged(refs) => refs.all(),
            Target::Hovered(_) | Target::Ui(_) | Target::Nothing => Vec::new(),
        }
    }

    /// Every id this action mentions, grouped by kind.
    #[must_use]
    pub fn referenced_elements(&self) -> ReferencedElements {
        let mut result = ReferencedElements::default();
        match self.target() {
            Target::Hovered(refs) | Target::Dragged(refs) => {
                result.lines.extend(refs.lines);
                result.points.extend(refs.points);
            }
            Target::Ui(id) => {
                result.unknown.insert(id);
            }
            Target::Nothing => {}
        }
        if let Some(selection) = self.selection() {
            result.lines.extend(selection.lines.iter().copied());
            result.points.extend(selection.points.iter().copied());
        }
        result
    }

    /// Whether `id` appears anywhere in this action.
    #[must_use]
    pub fn references(&self, id: ElementId) -> bool {
        self.referenced_elements().contains(id)
    }
}

enum Target {
    Nothing,
    Hovered(Refs),
    Dragged(Refs),
    Ui(ElementId),
}

struct Refs {
    lines: Vec<ElementId>,
    points: Vec<ElementId>,
}

impl Refs {
    fn line(id: ElementId) -> Self {
        Self {
            lines: vec![id],
            points: Vec::new(),
        }
    }

    fn point(id: ElementId) -> Self {
        Self {
            lines: Vec::new(),
            points: vec![id],
        }
    }

    fn crossing(lines: CrossingLines) -> Self {
        Self {
            lines: lines.ids().to_vec(),
            points: Vec::new(),
        }
    }

    fn all(self) -> Vec<ElementId> {
        self.points.into_iter().chain(self.lines).collect()
    }
}
