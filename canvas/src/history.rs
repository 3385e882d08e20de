//! History model: strokes, clear markers, and the undo/redo store.
//!
//! The visible drawing is a replay of `History::entries` from the most recent
//! [`HistoryEntry::Clear`] forward. Undo moves the newest entry into the trash
//! (the redo buffer); redo moves it back. Any new forward edit (a stroke start
//! or a clear) drains the trash, so a diverging edit can never be redone over.
//!
//! Strokes are pushed when their gesture starts, not when it ends, so an
//! interrupted gesture still leaves a valid partial stroke behind. While a
//! gesture is live its stroke is found again by [`StrokeId`].

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::style::LineStyle;
use crate::viewport::Point;

/// Identifier of a stroke, unique within one [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

/// A drawn path with its color and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Identifier used to reach this stroke while it is still being drawn.
    pub id: StrokeId,
    /// CSS color, or `None` for an eraser stroke painted in the background color.
    pub color: Option<String>,
    /// Line width in CSS pixels, fixed when the stroke starts.
    pub width: f64,
    /// Sampled points in drawing order.
    pub path: Vec<Point>,
}

impl Stroke {
    /// Whether this stroke is painted in the background color.
    #[must_use]
    pub fn is_eraser(&self) -> bool {
        self.color.is_none()
    }

    /// The stroke's own color and width.
    #[must_use]
    pub fn line_style(&self) -> LineStyle {
        LineStyle { color: self.color.clone(), width: self.width }
    }
}

/// One step of drawing history.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEntry {
    /// A freehand stroke.
    Stroke(Stroke),
    /// The canvas was cleared here; nothing earlier is visible.
    Clear,
}

impl HistoryEntry {
    /// Returns `true` for the clear marker.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    /// The stroke, if this entry is one.
    #[must_use]
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Clear => None,
        }
    }
}

/// Ordered drawing history plus the redo buffer.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    trash: Vec<HistoryEntry>,
    next_id: u64,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutations ---

    /// Append an entry. New forward progress invalidates the redo chain.
    pub fn push_entry(&mut self, entry: HistoryEntry) {
        self.clear_trash();
        self.entries.push(entry);
    }

    /// Start a stroke at `first` and append it. Returns the new stroke's id.
    pub fn push_stroke(&mut self, color: Option<String>, width: f64, first: Point) -> StrokeId {
        let id = StrokeId(self.next_id);
        self.next_id += 1;
        self.push_entry(HistoryEntry::Stroke(Stroke { id, color, width, path: vec![first] }));
        log::trace!("history: stroke {} started, {} entries", id.0, self.entries.len());
        id
    }

    /// Move the newest entry into the trash. Returns `false` if history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.entries.pop() else {
            return false;
        };
        self.trash.push(entry);
        log::debug!("history: undo, {} entries, {} in trash", self.entries.len(), self.trash.len());
        true
    }

    /// Move the newest trash entry back onto history and return it.
    ///
    /// Returns `None` if there is nothing to redo. The trash is left intact.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        let entry = self.trash.pop()?;
        self.entries.push(entry);
        log::debug!("history: redo, {} entries, {} in trash", self.entries.len(), self.trash.len());
        self.entries.last()
    }

    /// Append a clear marker unless the newest entry already is one.
    ///
    /// Returns `false` when the clear was suppressed as a duplicate.
    pub fn clear_canvas(&mut self) -> bool {
        if self.entries.last().is_some_and(HistoryEntry::is_clear) {
            return false;
        }
        self.push_entry(HistoryEntry::Clear);
        log::debug!("history: cleared, {} entries", self.entries.len());
        true
    }

    /// Discard everything in the redo buffer.
    pub fn clear_trash(&mut self) {
        if !self.trash.is_empty() {
            log::trace!("history: discarding {} trash entries", self.trash.len());
        }
        self.trash.clear();
    }

    /// Find a stroke by id for appending points, searching history and then
    /// the trash, newest first.
    pub fn stroke_mut(&mut self, id: StrokeId) -> Option<&mut Stroke> {
        self.entries
            .iter_mut()
            .rev()
            .chain(self.trash.iter_mut().rev())
            .find_map(|entry| match entry {
                HistoryEntry::Stroke(stroke) if stroke.id == id => Some(stroke),
                _ => None,
            })
    }

    // --- Queries ---

    /// Index of the most recent clear marker, if any.
    #[must_use]
    pub fn last_clear_index(&self) -> Option<usize> {
        self.entries.iter().rposition(HistoryEntry::is_clear)
    }

    /// Strokes after the most recent clear marker, oldest first.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> {
        let start = self.last_clear_index().map_or(0, |index| index + 1);
        self.entries[start..].iter().filter_map(HistoryEntry::as_stroke)
    }

    /// All history entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The redo buffer; the last element is redone first.
    #[must_use]
    pub fn trash(&self) -> &[HistoryEntry] {
        &self.trash
    }

    /// The newest history entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns `true` if there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns `true` if there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.trash.is_empty()
    }

    /// Number of history entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if history holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
