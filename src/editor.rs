use tracing::debug;

use crate::config::EngineConfig;
use crate::dataset::LabeledPoint;
use crate::error::{PartitionError, ValidationError};
use crate::geometry::{Boundary, RegionPair};
use crate::mapping::OverlayMapper;
use crate::math::Point2;
use crate::operations::classify::{ConfusionCounts, CountsKey, CountsMemo};
use crate::operations::line::{DragEndpoint, ExtendedHandles, ResolveLine};
use crate::operations::partition::PartitionSquare;
use crate::operations::validate::ValidateCurve;

/// How the user draws the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Two clicks, then drag handles.
    #[default]
    Line,
    /// Free-hand stroke, redrawn as a whole.
    Curve,
}

/// Boundary lifecycle for one level: create, revise, choose a side, reset.
///
/// Plain state. The host forwards pointer gestures as graph-space points
/// and reads back regions and counts. Gestures of the other mode are
/// ignored; check [`BoundaryEditor::mode`] before forwarding them.
#[derive(Debug, Clone)]
pub struct BoundaryEditor {
    config: EngineConfig,
    mode: EditMode,
    pending_click: Option<Point2>,
    boundary: Option<Boundary>,
    handles: Option<[Point2; 2]>,
    reference_is_pass: Option<bool>,
    dataset: Vec<LabeledPoint>,
    dataset_version: u64,
    memo: CountsMemo,
}

impl BoundaryEditor {
    #[must_use]
    pub fn new(config: EngineConfig, mode: EditMode) -> Self {
        Self {
            config,
            mode,
            pending_click: None,
            boundary: None,
            handles: None,
            reference_is_pass: None,
            dataset: Vec::new(),
            dataset_version: 0,
            memo: CountsMemo::new(),
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Vec<LabeledPoint>) -> Self {
        self.set_dataset(dataset);
        self
    }

    pub fn set_dataset(&mut self, dataset: Vec<LabeledPoint>) {
        self.dataset = dataset;
        self.dataset_version += 1;
    }

    #[must_use]
    pub fn dataset(&self) -> &[LabeledPoint] {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switches drawing mode, discarding the current boundary.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            self.mode = mode;
            self.reset();
        }
    }

    #[must_use]
    pub fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    /// Drag-handle positions of the current line.
    #[must_use]
    pub fn handles(&self) -> Option<[Point2; 2]> {
        self.handles
    }

    /// `Some(true)` if the reference corner's region was chosen as Pass.
    #[must_use]
    pub fn reference_is_pass(&self) -> Option<bool> {
        self.reference_is_pass
    }

    /// Forgets the boundary, pending click and side choice.
    pub fn reset(&mut self) {
        self.pending_click = None;
        self.clear_boundary();
        debug!("editor reset");
    }

    fn clear_boundary(&mut self) {
        self.boundary = None;
        self.handles = None;
        self.reference_is_pass = None;
    }

    /// Invalid shapes drop the boundary; a zero-length gesture keeps it.
    fn reject(&mut self, err: ValidationError) -> ValidationError {
        if err != ValidationError::DegenerateBoundary {
            self.clear_boundary();
        }
        err
    }

    /// A line-mode click. The first click of a gesture starts a new
    /// boundary; the second resolves the line against the square.
    ///
    /// In curve mode the click is ignored and `Ok(())` is returned with the
    /// state unchanged.
    ///
    /// # Errors
    ///
    /// The [`ValidationError`] of [`ResolveLine`]. A repeated click on the
    /// same spot is ignored and the first click stays pending.
    pub fn click(&mut self, point: Point2) -> Result<(), ValidationError> {
        if self.mode != EditMode::Line {
            return Ok(());
        }
        let Some(first) = self.pending_click else {
            self.clear_boundary();
            self.pending_click = Some(point);
            return Ok(());
        };

        let resolved = ResolveLine::new(first, point)
            .with_square(self.config.square)
            .execute()
            .and_then(|boundary| {
                let Boundary::Line(line) = boundary else {
                    return Err(ValidationError::DegenerateBoundary);
                };
                let handles = ExtendedHandles::new(line)
                    .with_square(self.config.square)
                    .with_offset(self.config.handle_offset)
                    .execute()?;
                Ok((line, handles))
            });

        match resolved {
            Ok((line, handles)) => {
                self.pending_click = None;
                self.boundary = Some(Boundary::Line(line));
                self.handles = Some(handles);
                Ok(())
            }
            Err(ValidationError::DegenerateBoundary) => Err(ValidationError::DegenerateBoundary),
            Err(err) => {
                self.pending_click = None;
                Err(self.reject(err))
            }
        }
    }

    /// Moves drag handle `index` of the current line and puts both handles
    /// back on the inflated square. A failed drag keeps the previous line.
    /// Without a line this is a no-op.
    ///
    /// # Errors
    ///
    /// The [`ValidationError`] of [`DragEndpoint`].
    pub fn drag_handle(&mut self, index: usize, position: Point2) -> Result<(), ValidationError> {
        let Some(handles) = self.handles else {
            return Ok(());
        };
        let dragged = DragEndpoint::new(handles, index, position)
            .with_square(self.config.square)
            .with_extension(self.config.drag_extension)
            .with_offset(self.config.handle_offset)
            .execute()?;
        self.boundary = Some(dragged.boundary);
        self.handles = Some(dragged.handles);
        Ok(())
    }

    /// Replaces the boundary with a newly drawn curve. Ignored in line mode,
    /// returning `Ok(())` with the state unchanged.
    ///
    /// # Errors
    ///
    /// The [`ValidationError`] of [`ValidateCurve`]. Invalid shapes clear the
    /// boundary; a degenerate stroke keeps the previous one.
    pub fn draw_curve(&mut self, path: &[Point2]) -> Result<(), ValidationError> {
        if self.mode != EditMode::Curve {
            return Ok(());
        }
        match ValidateCurve::new(path)
            .with_square(self.config.square)
            .with_tolerance(self.config.self_intersection_tolerance)
            .execute()
        {
            Ok(boundary) => {
                self.clear_boundary();
                self.boundary = Some(boundary);
                Ok(())
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Records which region is Pass. Ignored while there is no boundary.
    pub fn choose_side(&mut self, reference_is_pass: bool) {
        if self.boundary.is_some() {
            self.reference_is_pass = Some(reference_is_pass);
        }
    }

    /// Current partition, empty while there is no boundary.
    ///
    /// # Errors
    ///
    /// Propagates a [`PartitionError`].
    pub fn regions(&self, mapper: &impl OverlayMapper) -> Result<RegionPair, PartitionError> {
        let Some(boundary) = &self.boundary else {
            return Ok(RegionPair::empty());
        };
        PartitionSquare::new(boundary, self.config.reference_corner)
            .with_square(self.config.square)
            .execute(mapper)
    }

    /// Confusion counts over the current dataset, `None` until a boundary
    /// exists and a side is chosen.
    ///
    /// # Errors
    ///
    /// Propagates a [`PartitionError`].
    pub fn counts(&mut self) -> Result<Option<ConfusionCounts>, PartitionError> {
        let Some(boundary) = &self.boundary else {
            return Ok(None);
        };
        let key = CountsKey {
            boundary: boundary.clone(),
            reference: self.config.reference_corner,
            square: self.config.square,
            dataset_version: self.dataset_version,
            reference_is_pass: self.reference_is_pass,
        };
        self.memo.counts(key, &self.dataset)
    }
}

impl Default for BoundaryEditor {
    fn default() -> Self {
        Self::new(EngineConfig::default(), EditMode::default())
    }
}
