use crate::presentation::formatters::json::pretty;
use crate::presentation::formatters::style::Marker;
use crate::presentation::view_models::{
    CreateView, ImpersonationAttemptViewModel, ImpersonationStatusViewModel,
    ImpersonationViewModel, ListingViewModel, PermissionSweepViewModel, ProbeResultViewModel,
    ProbeVerdictViewModel, ServiceAccountsViewModel, ViewStyle,
};
use std::fmt;

// --------------------------------------------------------
// Permission probes
// --------------------------------------------------------

impl CreateView for ProbeResultViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProbeResultView { data: self })
    }
}

struct ProbeResultView<'a> {
    data: &'a ProbeResultViewModel,
}

impl fmt::Display for ProbeResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;

        if let Some(error) = &data.error {
            return writeln!(f, "Error making request: {}", error);
        }

        if data.dump {
            if let Some(body) = &data.body {
                writeln!(f, "✅ OK - Token info retrieved successfully.")?;
                return writeln!(f, "{}", pretty(body)?);
            }
            if let Some(error) = &data.body_error {
                return writeln!(f, "{}", error);
            }
        }

        match data.verdict {
            ProbeVerdictViewModel::Granted => {
                writeln!(f, "✅ {}: OK - Permissions retrieved successfully.", data.name)
            }
            ProbeVerdictViewModel::Unauthorized => writeln!(
                f,
                "❌ {}: Forbidden (needs permission) or token is expired.",
                data.name
            ),
            ProbeVerdictViewModel::Forbidden => {
                writeln!(f, "⚠️ {}: Not found (maybe API not enabled)", data.name)
            }
            ProbeVerdictViewModel::Unexpected | ProbeVerdictViewModel::RequestFailed => writeln!(
                f,
                "Error: received unexpected status code {}",
                data.status.unwrap_or_default()
            ),
        }
    }
}

impl CreateView for PermissionSweepViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(PermissionSweepView { data: self, style })
    }
}

struct PermissionSweepView<'a> {
    data: &'a PermissionSweepViewModel,
    style: ViewStyle,
}

impl fmt::Display for PermissionSweepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for probe in &self.data.probes {
            write!(f, "{}", probe.create_view(self.style))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Listings
// --------------------------------------------------------

impl CreateView for ListingViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ListingView { data: self })
    }
}

struct ListingView<'a> {
    data: &'a ListingViewModel,
}

impl fmt::Display for ListingView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", pretty(&self.data.body)?)
    }
}

// --------------------------------------------------------
// Impersonation
// --------------------------------------------------------

impl CreateView for ServiceAccountsViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ServiceAccountsView { data: self, style })
    }
}

struct ServiceAccountsView<'a> {
    data: &'a ServiceAccountsViewModel,
    style: ViewStyle,
}

impl fmt::Display for ServiceAccountsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = Marker::Info.paint(self.style);
        writeln!(f, "\n{} Listing Service Accounts:", info)?;
        for email in &self.data.emails {
            writeln!(f, " - {}", email)?;
        }
        writeln!(f, "\n{} Checking for impersonation permissions...", info)
    }
}

impl CreateView for ImpersonationAttemptViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ImpersonationAttemptView { data: self, style })
    }
}

struct ImpersonationAttemptView<'a> {
    data: &'a ImpersonationAttemptViewModel,
    style: ViewStyle,
}

impl fmt::Display for ImpersonationAttemptView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let email = &self.data.email;
        writeln!(
            f,
            "{} Trying to impersonate: {}",
            Marker::Info.paint(self.style),
            email
        )?;

        match &self.data.status {
            ImpersonationStatusViewModel::Success { access_token } => {
                let success = Marker::Success.paint(self.style);
                writeln!(f, "{} Impersonation SUCCESS for {}", success, email)?;
                writeln!(f, "{} Access Token: {}", success, access_token)
            }
            ImpersonationStatusViewModel::Failed { status } => writeln!(
                f,
                "{} Impersonation FAILED for {}: {}",
                Marker::Failure.paint(self.style),
                email,
                status
            ),
            ImpersonationStatusViewModel::DecodeFailed { error } => writeln!(
                f,
                "{} JSON decode failed for {}: {}",
                Marker::Failure.paint(self.style),
                email,
                error
            ),
            ImpersonationStatusViewModel::RequestFailed { error } => writeln!(
                f,
                "{} Request failed for {}: {}",
                Marker::Failure.paint(self.style),
                email,
                error
            ),
        }
    }
}

impl CreateView for ImpersonationViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ImpersonationView { data: self, style })
    }
}

struct ImpersonationView<'a> {
    data: &'a ImpersonationViewModel,
    style: ViewStyle,
}

impl fmt::Display for ImpersonationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accounts = ServiceAccountsViewModel {
            emails: self.data.service_accounts.clone(),
        };
        write!(f, "{}", accounts.create_view(self.style))?;
        for attempt in &self.data.attempts {
            write!(f, "{}", attempt.create_view(self.style))?;
        }
        Ok(())
    }
}
