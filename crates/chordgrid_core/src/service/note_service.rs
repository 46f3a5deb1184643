//! Note placement use-case service.
//!
//! # Responsibility
//! - Provide single-note query/place/remove entry points.
//! - Own barre chain placement, resizing and removal, including overlap
//!   reconciliation with neighbouring chains.
//!
//! # Invariants
//! - Every mutating call commits exactly one batch, so a failed oracle
//!   lookup leaves the store untouched.
//! - After `place_barre`, the chain covers contiguous strings tagged
//!   `BarreStart, BarreDummy.., BarreEnd` with remaining spans `span - i`.
//! - No `BarreDummy`/`BarreEnd` fragment is left directly after a chain
//!   written by this service.
//! - Chains only grow into neighbours; a neighbouring chain is never
//!   truncated mid-chain.

use crate::grid::{Direction, GridError, GridOracle};
use crate::model::grid::GridPos;
use crate::model::note::{BarreStyle, Note, NoteStyle, NoteSymbol};
use crate::repo::note_repo::{NoteBatch, NoteRepository};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NoteServiceResult<T> = Result<T, NoteServiceError>;

/// Errors from note placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Coordinate or walk rejected by the grid oracle.
    Grid(GridError),
    /// A placement asked for zero strings.
    ZeroSpan { fret: u32, string: u32 },
    /// A chain tag was requested for a single-cell placement.
    BarreSymbol(NoteSymbol),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "{err}"),
            Self::ZeroSpan { fret, string } => {
                write!(f, "span must be at least 1 (fret={fret} string={string})")
            }
            Self::BarreSymbol(symbol) => write!(
                f,
                "barre chain tag {} cannot be placed as a single note",
                symbol.as_str()
            ),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::ZeroSpan { .. } | Self::BarreSymbol(_) => None,
        }
    }
}

impl From<GridError> for NoteServiceError {
    fn from(value: GridError) -> Self {
        Self::Grid(value)
    }
}

/// Note position service facade.
#[derive(Debug)]
pub struct NoteService<R: NoteRepository, G: GridOracle> {
    repo: R,
    grid: G,
}

impl<R: NoteRepository, G: GridOracle> NoteService<R, G> {
    /// Creates a service over a repository and a grid oracle.
    pub fn new(repo: R, grid: G) -> Self {
        Self { repo, grid }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn has_note_at(&self, pos: GridPos) -> bool {
        self.repo.has_note_at(pos)
    }

    /// Absent is an expected result for empty cells.
    pub fn get_note_at(&self, pos: GridPos) -> Option<Note> {
        self.repo.get_note_at(pos)
    }

    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.list_notes()
    }

    /// Upper bound on a barre span starting at `string`.
    pub fn max_span_from_string(&self, string: u32) -> u32 {
        self.grid.max_span_from_string(string)
    }

    /// Places one single-cell note, overwriting whatever is at the cell.
    pub fn place_note(
        &mut self,
        fret: u32,
        string: u32,
        style: impl Into<NoteStyle>,
    ) -> NoteServiceResult<Note> {
        self.place_note_with_span(fret, string, style, 1)
    }

    /// Places one note carrying an explicit span value.
    ///
    /// # Contract
    /// - Resolves `NoteStyle::Default` to `Circle` on fret 0, else `Ball`.
    /// - Overwrites one record with no chain awareness; callers replacing a
    ///   barre node should go through `place_barre` or `remove_barre`.
    ///
    /// # Errors
    /// - `ZeroSpan` when `span == 0`.
    /// - `Grid` when the coordinate is off the board.
    pub fn place_note_with_span(
        &mut self,
        fret: u32,
        string: u32,
        style: impl Into<NoteStyle>,
        span: u32,
    ) -> NoteServiceResult<Note> {
        if span == 0 {
            return Err(NoteServiceError::ZeroSpan { fret, string });
        }
        let symbol = style.into().resolve(fret);
        let note = self.build_note(fret, string, symbol, span, false)?;

        let mut batch = NoteBatch::new();
        batch.set(note.clone());
        self.repo.commit(batch);

        debug!(
            "event=note_place module=notes status=ok pos={} symbol={} span={}",
            note.position,
            symbol.as_str(),
            span
        );
        Ok(note)
    }

    /// Removes the note at `pos`; returns whether a note was removed.
    ///
    /// Removing one chain node leaves the rest of the chain in place; use
    /// `remove_barre` to delete a whole barre.
    pub fn remove_note_at(&mut self, pos: GridPos) -> bool {
        if !self.repo.has_note_at(pos) {
            return false;
        }
        let mut batch = NoteBatch::new();
        batch.unset(pos);
        self.repo.commit(batch);

        debug!("event=note_remove module=notes status=ok pos={pos}");
        true
    }

    /// Places a single-cell note, clearing any barre chain under the cell.
    ///
    /// When the cell holds a chain node, the whole chain is removed in the
    /// same batch as the new note is written.
    ///
    /// # Errors
    /// - `BarreSymbol` when the resolved symbol is a chain tag.
    /// - `Grid` when the coordinate is off the board.
    pub fn replace_note(
        &mut self,
        fret: u32,
        string: u32,
        style: impl Into<NoteStyle>,
    ) -> NoteServiceResult<Note> {
        let symbol = style.into().resolve(fret);
        if symbol.is_barre_node() {
            return Err(NoteServiceError::BarreSymbol(symbol));
        }
        let note = self.build_note(fret, string, symbol, 1, false)?;

        let mut batch = NoteBatch::new();
        self.stage_removal(note.position, &mut batch)?;
        let cleared = batch.len();
        batch.set(note.clone());
        self.repo.commit(batch);

        debug!(
            "event=note_replace module=notes status=ok pos={} symbol={} cleared={cleared}",
            note.position,
            symbol.as_str()
        );
        Ok(note)
    }

    /// Places or resizes a barre starting at `(fret, string)`.
    ///
    /// # Contract
    /// - Targeting any node of an existing chain operates on that chain
    ///   from its true start; the working span becomes
    ///   `start.span - node.span + requested_span`.
    /// - When the new end lands on a note outside that chain, the chain
    ///   grows by the note's span minus one, swallowing a trailing barre.
    /// - The span is capped to the strings left on the board.
    /// - Chain fragments left past the new end are removed.
    /// - A rebased chain keeps its outline; a new chain is filled.
    ///
    /// Returns the written `BarreStart` record.
    ///
    /// # Errors
    /// - `ZeroSpan` when `requested_span == 0`.
    /// - `Grid` when the target coordinate is off the board.
    pub fn place_barre(
        &mut self,
        fret: u32,
        string: u32,
        requested_span: u32,
    ) -> NoteServiceResult<Note> {
        self.write_barre(fret, string, requested_span, None)
    }

    /// Same as `place_barre`, with the chain drawn in `style`.
    pub fn place_barre_with_style(
        &mut self,
        fret: u32,
        string: u32,
        requested_span: u32,
        style: BarreStyle,
    ) -> NoteServiceResult<Note> {
        self.write_barre(fret, string, requested_span, Some(style))
    }

    fn write_barre(
        &mut self,
        fret: u32,
        string: u32,
        requested_span: u32,
        style: Option<BarreStyle>,
    ) -> NoteServiceResult<Note> {
        if requested_span == 0 {
            return Err(NoteServiceError::ZeroSpan { fret, string });
        }
        let target = self.grid.to_position(fret, string, None)?;

        let mut start = target.pos;
        let mut span = requested_span;
        let mut existing_chain: Option<Note> = None;
        if let Some((chain_start, node)) = self.chain_containing(target.pos) {
            span = chain_start
                .span
                .saturating_sub(node.span)
                .saturating_add(requested_span);
            start = chain_start.position;
            debug!(
                "event=barre_rebase module=notes status=ok target={} start={} span={}",
                target.pos, start, span
            );
            existing_chain = Some(chain_start);
        }

        if let Ok(end) = self.grid.step(start, Direction::Right, span - 1) {
            if let Some(end_note) = self.repo.get_note_at(end) {
                let inside_existing = existing_chain
                    .as_ref()
                    .is_some_and(|chain: &Note| end.string <= chain.last_covered_string());
                if !inside_existing {
                    span = span.saturating_add(end_note.span.saturating_sub(1));
                    info!(
                        "event=barre_absorb module=notes status=ok end={} absorbed_span={} span={}",
                        end, end_note.span, span
                    );
                }
            }
        }

        let max_span = self
            .grid
            .strings_count()
            .min(self.grid.max_span_from_string(start.string));
        if span > max_span {
            debug!(
                "event=barre_clamp module=notes status=ok start={start} span={span} max_span={max_span}"
            );
            span = max_span;
        }

        let outline = match style {
            Some(style) => style.is_outline(),
            None => existing_chain.as_ref().is_some_and(|chain| chain.outline),
        };

        let mut batch = NoteBatch::new();
        let head = self.build_note(
            start.fret,
            start.string,
            NoteSymbol::BarreStart,
            span,
            outline,
        )?;
        batch.set(head.clone());
        for offset in 1..span {
            let pos = self.grid.step(start, Direction::Right, offset)?;
            let symbol = if offset == span - 1 {
                NoteSymbol::BarreEnd
            } else {
                NoteSymbol::BarreDummy
            };
            batch.set(self.build_note(pos.fret, pos.string, symbol, span - offset, outline)?);
        }

        let last = GridPos::new(start.fret, head.last_covered_string());
        let trimmed = self.stage_orphan_tail_removal(last, &mut batch);
        if trimmed > 0 {
            info!(
                "event=barre_trim module=notes status=ok start={start} span={span} trimmed={trimmed}"
            );
        }

        self.repo.commit(batch);
        debug!("event=barre_place module=notes status=ok start={start} span={span}");
        Ok(head)
    }

    /// Resizes the chain starting at `start` to `new_span` strings.
    ///
    /// Shrinking removes the nodes past the new end; growing absorbs any
    /// chain the new end lands on.
    pub fn resize_barre(&mut self, start: GridPos, new_span: u32) -> NoteServiceResult<Note> {
        self.place_barre(start.fret, start.string, new_span)
    }

    /// Removes the whole chain containing `pos`.
    ///
    /// A non-barre note at `pos` is removed on its own. Returns the number
    /// of removed records.
    pub fn remove_barre(&mut self, pos: GridPos) -> NoteServiceResult<usize> {
        if !self.repo.has_note_at(pos) {
            return Ok(0);
        }

        let mut batch = NoteBatch::new();
        self.stage_removal(pos, &mut batch)?;
        let removed = batch.len();
        self.repo.commit(batch);

        info!("event=barre_remove module=notes status=ok pos={pos} removed={removed}");
        Ok(removed)
    }

    /// Walks left from `from` to the nearest `BarreStart`.
    ///
    /// Empty cells and other notes are walked over. Returns `None` once the
    /// walk passes the first string.
    pub fn find_barre_start(&self, from: GridPos) -> Option<Note> {
        let mut cursor = from;
        loop {
            let next = self.grid.step(cursor, Direction::Left, 1).ok()?;
            match self.repo.get_note_at(next) {
                Some(note) if note.symbol == NoteSymbol::BarreStart => return Some(note),
                _ => cursor = next,
            }
        }
    }

    /// Resolves the chain covering `pos` as `(start node, node at pos)`.
    ///
    /// A continuation whose nearest start does not reach `pos` is an orphan
    /// and yields `None`.
    fn chain_containing(&self, pos: GridPos) -> Option<(Note, Note)> {
        let node = self.repo.get_note_at(pos)?;
        match node.symbol {
            NoteSymbol::BarreStart => Some((node.clone(), node)),
            NoteSymbol::BarreDummy | NoteSymbol::BarreEnd => {
                let chain_start = self.find_barre_start(pos)?;
                if chain_start.last_covered_string() < pos.string {
                    return None;
                }
                Some((chain_start, node))
            }
            _ => None,
        }
    }

    /// Stages removal of the note at `pos`, or of its whole chain.
    fn stage_removal(&self, pos: GridPos, batch: &mut NoteBatch) -> NoteServiceResult<()> {
        let Some((chain_start, _)) = self.chain_containing(pos) else {
            if self.repo.has_note_at(pos) {
                batch.unset(pos);
            }
            return Ok(());
        };

        for offset in 0..chain_start.span {
            let node = self
                .grid
                .step(chain_start.position, Direction::Right, offset)?;
            if self.repo.has_note_at(node) {
                batch.unset(node);
            }
        }
        Ok(())
    }

    fn stage_orphan_tail_removal(&self, last: GridPos, batch: &mut NoteBatch) -> usize {
        let mut removed = 0;
        let mut cursor = last;
        while let Ok(next) = self.grid.step(cursor, Direction::Right, 1) {
            match self.repo.get_note_at(next) {
                Some(note) if note.symbol.is_barre_continuation() => {
                    batch.unset(next);
                    removed += 1;
                    if note.symbol == NoteSymbol::BarreEnd {
                        break;
                    }
                    cursor = next;
                }
                _ => break,
            }
        }
        removed
    }

    fn build_note(
        &self,
        fret: u32,
        string: u32,
        symbol: NoteSymbol,
        span: u32,
        outline: bool,
    ) -> NoteServiceResult<Note> {
        let area_span = (symbol == NoteSymbol::BarreStart).then_some(span);
        let placement = self.grid.to_position(fret, string, area_span)?;
        Ok(Note {
            position: placement.pos,
            area: placement.area,
            fret,
            string,
            symbol,
            span,
            outline,
        })
    }
}
