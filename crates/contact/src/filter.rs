//! Client-side narrowing of the admin submission list.
//!
//! The status filter and the free-text search are independent predicates
//! combined with a logical AND. Both keep the source order.

use std::{fmt, str::FromStr};

use triove_shared::Principal;

use crate::{ContactSubmission, Status, export::CsvExport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, contact: &ContactSubmission) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => contact.status == *status,
        }
    }

    pub fn is(&self, value: &str) -> bool {
        self.to_string() == value
    }
}

impl FromStr for StatusFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(StatusFilter::All),
            other => Status::from_str(other).map(StatusFilter::Only),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

/// Case-insensitive substring match over name, email, company, subject and
/// message. An empty (or blank) query matches everything.
pub fn matches_search(contact: &ContactSubmission, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    [
        contact.name.as_str(),
        contact.email.as_str(),
        contact.company.as_deref().unwrap_or_default(),
        contact.subject.as_str(),
        contact.message.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter(
    list: &[ContactSubmission],
    status: StatusFilter,
    query: &str,
) -> Vec<ContactSubmission> {
    list.iter()
        .filter(|c| status.matches(c) && matches_search(c, query))
        .cloned()
        .collect()
}

/// Admin list state: the loaded source plus the two filter inputs. The
/// visible set is recomputed whenever any of the three changes.
#[derive(Debug, Default, Clone)]
pub struct AdminView {
    source: Vec<ContactSubmission>,
    status: StatusFilter,
    search: String,
    filtered: Vec<ContactSubmission>,
}

impl AdminView {
    pub fn new(
        source: Vec<ContactSubmission>,
        status: StatusFilter,
        search: impl Into<String>,
    ) -> Self {
        let mut view = Self {
            source,
            status,
            search: search.into(),
            filtered: vec![],
        };
        view.recompute();

        view
    }

    fn recompute(&mut self) {
        self.filtered = filter(&self.source, self.status, &self.search);
    }

    pub fn set_source(&mut self, source: Vec<ContactSubmission>) {
        self.source = source;
        self.recompute();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.recompute();
    }

    /// Reloads the source from the store, keeping both filter inputs.
    pub async fn refresh(
        &mut self,
        query: &crate::Query,
        principal: &Principal,
    ) -> triove_shared::Result<()> {
        let source = query.list(principal).await?;
        self.set_source(source);

        Ok(())
    }

    pub fn source(&self) -> &[ContactSubmission] {
        &self.source
    }

    pub fn filtered(&self) -> &[ContactSubmission] {
        &self.filtered
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn export(&self) -> triove_shared::Result<Option<CsvExport>> {
        crate::export::export_csv(&self.filtered)
    }
}
