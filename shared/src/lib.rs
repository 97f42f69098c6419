pub mod accept;
pub mod intake;
pub mod organize;
pub mod payment;
pub mod protect;
pub mod route;
pub mod selection;
pub mod session;
pub mod tool;
pub mod watermark;

pub use {
    accept::AcceptSpec,
    intake::{Delivery, DragPhase, DropTarget, Intake, IntakeReport, IntakeSource, NamedFile},
    organize::{PageNumberOptions, RemovePagesOptions, RepairOptions, RotateOptions},
    protect::{ProtectOptions, UnlockOptions},
    selection::Selection,
    session::{SessionBus, SessionState},
    tool::{Format, Tool},
    watermark::WatermarkSettings,
};
