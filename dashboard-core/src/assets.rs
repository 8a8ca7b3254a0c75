use serde::Serialize;

/// Hosted prediction app, linked from the sidebar.
pub const LIVE_APP_URL: &str = "https://prediction-dnzyblcubfgrktmer4bzau.streamlit.app/";

/// Downloadable artifact exposed as a plain hyperlink. Resolved by the
/// hosting environment, opaque to the dashboard.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DownloadAsset {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub fn downloads() -> [DownloadAsset; 3] {
    [
        DownloadAsset {
            label: "Dataset",
            href: "/dataset.csv",
            icon: "📥",
        },
        DownloadAsset {
            label: "Notebook",
            href: "/Projet_ML.ipynb",
            icon: "📓",
        },
        DownloadAsset {
            label: "Report",
            href: "/Projet_ML.pdf",
            icon: "📄",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_links_are_root_relative() {
        for asset in downloads() {
            assert!(asset.href.starts_with('/'), "{}", asset.href);
        }
    }
}
