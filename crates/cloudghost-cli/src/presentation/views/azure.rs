use crate::presentation::formatters::json::pretty;
use crate::presentation::formatters::style::Marker;
use crate::presentation::view_models::{
    AuthViewModel, BlobDownloadViewModel, BlobListViewModel, CreateView, KeyStatusViewModel,
    ManagementViewModel, SectionContentViewModel, SectionViewModel, StorageAccountViewModel,
    SubscriptionSelectedViewModel, TokenStoredViewModel, ViewStyle,
};
use std::fmt;

// --------------------------------------------------------
// Auth
// --------------------------------------------------------

impl CreateView for TokenStoredViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(TokenStoredView)
    }
}

struct TokenStoredView;

impl fmt::Display for TokenStoredView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Access token acquired and stored")
    }
}

impl CreateView for SubscriptionSelectedViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(SubscriptionSelectedView { data: self })
    }
}

struct SubscriptionSelectedView<'a> {
    data: &'a SubscriptionSelectedViewModel,
}

impl fmt::Display for SubscriptionSelectedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Subscription selected: {} ({})",
            self.data.name, self.data.id
        )
    }
}

impl CreateView for AuthViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(AuthView { data: self, style })
    }
}

struct AuthView<'a> {
    data: &'a AuthViewModel,
    style: ViewStyle,
}

impl fmt::Display for AuthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.token.create_view(self.style))?;
        write!(f, "{}", self.data.subscription.create_view(self.style))
    }
}

// --------------------------------------------------------
// Blob storage
// --------------------------------------------------------

impl CreateView for BlobListViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(BlobListView { data: self })
    }
}

struct BlobListView<'a> {
    data: &'a BlobListViewModel,
}

impl fmt::Display for BlobListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.data.blobs {
            writeln!(f, "Blob Name: {}", name)?;
        }
        Ok(())
    }
}

impl CreateView for BlobDownloadViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(BlobDownloadView { data: self })
    }
}

struct BlobDownloadView<'a> {
    data: &'a BlobDownloadViewModel,
}

impl fmt::Display for BlobDownloadView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Downloaded {} to {} ({} bytes)",
            self.data.blob, self.data.output, self.data.bytes
        )
    }
}

// --------------------------------------------------------
// Management enumeration
// --------------------------------------------------------

impl CreateView for SectionViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(SectionView { data: self, style })
    }
}

struct SectionView<'a> {
    data: &'a SectionViewModel,
    style: ViewStyle,
}

impl fmt::Display for SectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.content {
            SectionContentViewModel::Document { body } => {
                if let Some(title) = self.data.title {
                    writeln!(f, "{}", title)?;
                }
                writeln!(f, "{}", pretty(body)?)
            }
            SectionContentViewModel::StorageAccounts { accounts } => {
                for account in accounts {
                    write!(f, "{}", StorageAccountView::new(account, self.style))?;
                }
                Ok(())
            }
        }
    }
}

struct StorageAccountView<'a> {
    data: &'a StorageAccountViewModel,
    style: ViewStyle,
}

impl<'a> StorageAccountView<'a> {
    fn new(data: &'a StorageAccountViewModel, style: ViewStyle) -> Self {
        Self { data, style }
    }
}

impl fmt::Display for StorageAccountView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.data.name;
        writeln!(f, "\nStorage Account: {}", name)?;
        match &self.data.keys {
            KeyStatusViewModel::Listed { body } => writeln!(f, "  Keys: {}", body),
            KeyStatusViewModel::Denied { reason, .. } => writeln!(
                f,
                "  {} Access denied to list keys for {}: {}",
                Marker::Warning.paint(self.style),
                name,
                reason
            ),
            KeyStatusViewModel::RequestFailed { error } => writeln!(
                f,
                "  {} Key request failed for {}: {}",
                Marker::Warning.paint(self.style),
                name,
                error
            ),
        }
    }
}

impl CreateView for ManagementViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ManagementView { data: self, style })
    }
}

struct ManagementView<'a> {
    data: &'a ManagementViewModel,
    style: ViewStyle,
}

impl fmt::Display for ManagementView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.data.sections {
            write!(f, "{}", section.create_view(self.style))?;
        }
        Ok(())
    }
}
