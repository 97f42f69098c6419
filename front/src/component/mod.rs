mod drop_zone;
mod loading_spinner;
mod notification;
mod page_settings;
mod protect_settings;
mod toolbar;
mod upload_area;
mod watermark_settings;

pub use drop_zone::DropZone;
pub use loading_spinner::LoadingSpinner;
pub use notification::{push_notification, Notification, NotificationManager};
pub use page_settings::{
    PageNumberSettings, RemovePagesSettings, RepairSettings, RotateSettings, UnlockSettings,
};
pub use protect_settings::ProtectSettings;
pub use toolbar::Toolbar;
pub use upload_area::UploadArea;
pub use watermark_settings::WatermarkSettingsForm;

pub type FileSelection = shared::Selection<BrowserFile>;

/// Browser files are what the intake logic works on
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(pub web_sys::File);

impl shared::NamedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Files out of a drop or a picker change, in order
pub fn files_of(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };

    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
