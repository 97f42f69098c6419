//! File intake: turns drag and picker events into one shape and feeds a [`Selection`]
//!
//! The browser side only has to build an [`Intake`] from whatever event it received,
//! everything after that is plain data and is tested here.

use crate::{accept::AcceptSpec, selection::Selection};

/// Anything that can sit in a selection
pub trait NamedFile {
    fn name(&self) -> String;
    fn size(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeSource {
    Drag,
    Picker,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Intake<F> {
    source: IntakeSource,
    files: Vec<F>,
}

impl<F> Intake<F> {
    pub fn from_drag(files: impl IntoIterator<Item = F>) -> Self {
        Self {
            source: IntakeSource::Drag,
            files: files.into_iter().collect(),
        }
    }

    pub fn from_picker(files: impl IntoIterator<Item = F>) -> Self {
        Self {
            source: IntakeSource::Picker,
            files: files.into_iter().collect(),
        }
    }

    pub fn source(&self) -> IntakeSource {
        self.source
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_files(self) -> Vec<F> {
        self.files
    }
}

/// What a drop target hands to its owner
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery<F> {
    Single(F),
    Many(Vec<F>),
}

impl<F> Delivery<F> {
    pub fn into_vec(self) -> Vec<F> {
        match self {
            Delivery::Single(file) => vec![file],
            Delivery::Many(files) => files,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Delivery::Single(_) => 1,
            Delivery::Many(files) => files.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
}

/// Visual state of a drop zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    multiple: bool,
    active: bool,
}

impl DropTarget {
    pub fn new(multiple: bool) -> Self {
        Self {
            multiple,
            active: false,
        }
    }

    pub fn multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn drag(&mut self, phase: DragPhase) {
        self.active = match phase {
            DragPhase::Enter | DragPhase::Over => true,
            DragPhase::Leave => false,
        };
    }

    /// Returns nothing when the event carried no file
    pub fn receive<F>(&mut self, intake: Intake<F>) -> Option<Delivery<F>> {
        if intake.source == IntakeSource::Drag {
            self.active = false;
        }

        let mut files = intake.files;

        if files.is_empty() {
            return None;
        }

        if self.multiple {
            Some(Delivery::Many(files))
        } else {
            Some(Delivery::Single(files.swap_remove(0)))
        }
    }
}

/// Outcome of feeding an intake into a selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeReport {
    pub accepted: usize,
    pub rejected: Vec<String>,
}

impl IntakeReport {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Dropped files are filtered against `accept` and appended,
/// picked files were already filtered by the dialog and replace the selection
pub fn ingest<F: NamedFile>(
    selection: &mut Selection<F>,
    accept: &AcceptSpec,
    intake: Intake<F>,
) -> IntakeReport {
    if intake.is_empty() {
        return IntakeReport::default();
    }

    match intake.source {
        IntakeSource::Picker => {
            let accepted = intake.files.len();
            selection.replace(intake.files);
            IntakeReport {
                accepted,
                rejected: Vec::new(),
            }
        }
        IntakeSource::Drag => {
            let (accepted, rejected): (Vec<F>, Vec<F>) = intake
                .files
                .into_iter()
                .partition(|file| accept.accepts(&file.name()));

            let report = IntakeReport {
                accepted: accepted.len(),
                rejected: rejected.iter().map(NamedFile::name).collect(),
            };

            selection.add(accepted);
            report
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{ingest, Delivery, DragPhase, DropTarget, Intake, IntakeReport, NamedFile},
        crate::{accept::AcceptSpec, selection::Selection},
        pretty_assertions::assert_eq,
    };

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile(&'static str);

    impl NamedFile for FakeFile {
        fn name(&self) -> String {
            self.0.to_string()
        }
        fn size(&self) -> u64 {
            self.0.len() as u64
        }
    }

    fn names(selection: &Selection<FakeFile>) -> Vec<&'static str> {
        selection.iter().map(|file| file.0).collect()
    }

    #[test]
    fn drag_phases_toggle_active_flag() {
        let mut target = DropTarget::new(true);
        assert!(!target.is_active());

        target.drag(DragPhase::Enter);
        assert!(target.is_active());
        target.drag(DragPhase::Over);
        assert!(target.is_active());
        target.drag(DragPhase::Leave);
        assert!(!target.is_active());

        target.drag(DragPhase::Over);
        let delivery = target.receive(Intake::from_drag([FakeFile("a.pdf")]));
        assert!(!target.is_active());
        assert_eq!(delivery, Some(Delivery::Many(vec![FakeFile("a.pdf")])));
    }

    #[test]
    fn single_mode_forwards_the_first_file() {
        let mut target = DropTarget::new(false);
        let delivery = target.receive(Intake::from_picker([FakeFile("a.pdf"), FakeFile("b.pdf")]));

        assert_eq!(delivery, Some(Delivery::Single(FakeFile("a.pdf"))));
    }

    #[test]
    fn empty_drop_emits_nothing() {
        let mut target = DropTarget::new(true);
        target.drag(DragPhase::Enter);

        assert_eq!(target.receive(Intake::<FakeFile>::from_drag([])), None);
        assert!(!target.is_active());
    }

    #[test]
    fn dropped_files_are_filtered_and_appended() {
        let mut selection = Selection::from_iter([FakeFile("first.pdf")]);

        let report = ingest(
            &mut selection,
            &AcceptSpec::parse(".pdf"),
            Intake::from_drag([FakeFile("a.pdf"), FakeFile("a.PDF"), FakeFile("a.txt")]),
        );

        assert_eq!(names(&selection), vec!["first.pdf", "a.pdf", "a.PDF"]);
        assert_eq!(
            report,
            IntakeReport {
                accepted: 2,
                rejected: vec!["a.txt".to_string()]
            }
        );
        assert!(report.has_rejections());
    }

    #[test]
    fn empty_drop_keeps_selection() {
        let mut selection = Selection::from_iter([FakeFile("a.pdf"), FakeFile("b.pdf")]);
        let before = selection.clone();

        let report = ingest(&mut selection, &AcceptSpec::default(), Intake::from_drag([]));

        assert_eq!(selection, before);
        assert_eq!(report, IntakeReport::default());
    }

    #[test]
    fn picked_files_are_trusted_and_replace_selection() {
        let mut selection = Selection::from_iter([FakeFile("old.pdf")]);

        let report = ingest(
            &mut selection,
            &AcceptSpec::parse(".pdf"),
            Intake::from_picker([FakeFile("scan.png"), FakeFile("doc.pdf")]),
        );

        assert_eq!(names(&selection), vec!["scan.png", "doc.pdf"]);
        assert_eq!(report.accepted, 2);
        assert!(!report.has_rejections());
    }

    #[test]
    fn delivery_flattens() {
        assert_eq!(Delivery::Single(1).into_vec(), vec![1]);
        assert_eq!(Delivery::Many(vec![1, 2]).len(), 2);
    }
}
