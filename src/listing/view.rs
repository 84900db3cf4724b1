use serde::{Deserialize, Serialize};

use crate::model::{design_focus_label, opportunities_label, Submission};

pub const PAGE_SIZE: usize = 25;

/// Partition tab over the submission set. `New` and `Selected` split on
/// selected-date presence; `All` applies no partition filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    New,
    Selected,
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Location,
    Role,
    Seeking,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// User-controlled view parameters. `sort: None` keeps the order the store
/// delivered, i.e. creation-descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewQuery {
    pub search: String,
    pub tab: Tab,
    pub sort: Option<Sort>,
    pub page: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            tab: Tab::All,
            sort: None,
            page: 1,
        }
    }
}

impl ViewQuery {
    /// Changing the search term resets to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// A click on a sort column cycles none -> ascending -> descending ->
    /// none for that field; a click on a different field starts over at
    /// ascending. Either way the page resets to 1.
    pub fn cycle_sort(&mut self, field: SortField) {
        self.sort = match self.sort {
            Some(Sort {
                field: current,
                direction: SortDirection::Asc,
            }) if current == field => Some(Sort {
                field,
                direction: SortDirection::Desc,
            }),
            Some(Sort {
                field: current,
                direction: SortDirection::Desc,
            }) if current == field => None,
            _ => Some(Sort {
                field,
                direction: SortDirection::Asc,
            }),
        };
        self.page = 1;
    }
}

/// Per-tab totals over the full set, independent of the search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub new: usize,
    pub selected: usize,
    pub all: usize,
}

pub fn tab_counts(submissions: &[Submission]) -> TabCounts {
    let selected = submissions.iter().filter(|s| s.is_selected()).count();
    TabCounts {
        new: submissions.len() - selected,
        selected,
        all: submissions.len(),
    }
}

/// One visible page of the derived view, plus everything the toolbar needs.
#[derive(Debug, Clone, Serialize)]
pub struct ViewPage {
    pub rows: Vec<Submission>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub showing_from: usize,
    pub showing_to: usize,
    pub counts: TabCounts,
}

fn matches_search(submission: &Submission, needle: &str) -> bool {
    let hay = |value: &str| value.to_lowercase().contains(needle);

    hay(&submission.full_name)
        || hay(submission.location_str())
        || hay(&submission.design_focus)
        || hay(design_focus_label(&submission.design_focus))
        || hay(&submission.opportunities)
        || hay(opportunities_label(&submission.opportunities))
        || hay(&submission.email)
        || hay(submission.bio_str())
}

fn in_partition(submission: &Submission, tab: Tab) -> bool {
    match tab {
        Tab::New => !submission.is_selected(),
        Tab::Selected => submission.is_selected(),
        Tab::All => true,
    }
}

fn sort_key(submission: &Submission, field: SortField) -> String {
    match field {
        SortField::Name => submission.full_name.to_lowercase(),
        SortField::Location => submission.location_str().to_lowercase(),
        SortField::Role => submission.design_focus.to_lowercase(),
        SortField::Seeking => submission.opportunities.to_lowercase(),
        SortField::Date => submission.submission_date(),
    }
}

/// Search filter, then partition filter, then the optional sort. With no
/// sort the relative order the store delivered is preserved; the sort itself
/// is stable, so equal keys also keep that order.
pub fn filter_and_sort<'a>(
    submissions: &'a [Submission],
    query: &ViewQuery,
) -> Vec<&'a Submission> {
    let needle = query.search.to_lowercase();

    let mut view: Vec<&Submission> = submissions
        .iter()
        .filter(|s| needle.is_empty() || matches_search(s, &needle))
        .filter(|s| in_partition(s, query.tab))
        .collect();

    if let Some(sort) = query.sort {
        view.sort_by(|a, b| {
            let (ka, kb) = (sort_key(a, sort.field), sort_key(b, sort.field));
            match sort.direction {
                SortDirection::Asc => ka.cmp(&kb),
                SortDirection::Desc => kb.cmp(&ka),
            }
        });
    }

    view
}

/// Derive the visible page for the query. The requested page is clamped into
/// the valid range rather than erroring.
pub fn page_of(submissions: &[Submission], query: &ViewQuery) -> ViewPage {
    let view = filter_and_sort(submissions, query);
    let total = view.len();
    let total_pages = total.div_ceil(PAGE_SIZE);
    let page = query.page.clamp(1, total_pages.max(1));

    let start = (page - 1) * PAGE_SIZE;
    let rows: Vec<Submission> = view
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .map(|s| (*s).clone())
        .collect();

    let showing_to = (start + rows.len()).min(total);
    ViewPage {
        showing_from: if total == 0 { 0 } else { start + 1 },
        showing_to,
        total,
        page,
        total_pages,
        has_prev: page > 1,
        has_next: page < total_pages,
        counts: tab_counts(submissions),
        rows,
    }
}
