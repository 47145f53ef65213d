//! Full page rendering: notice, form and record table.

use askama::Template;

use super::error::PageError;
use super::record_table::RecordTable;
use super::widgets::FormWidgets;
use crate::domain::ports::CandidateStore;
use crate::domain::{AppShell, Notice};

/// Rendered form of a pending [`Notice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub kind: &'static str,
    pub message: &'static str,
}

impl From<&Notice> for NoticeView {
    fn from(notice: &Notice) -> Self {
        let kind = if notice.is_acknowledgement() {
            "success"
        } else {
            "failure"
        };
        Self {
            kind,
            message: notice.message(),
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "page.html")]
pub struct CandidatePage<'a> {
    pub notice: Option<NoticeView>,
    pub widgets: FormWidgets<'a>,
    pub table: RecordTable<'a>,
}

/// Render the page from the shell's current state.
///
/// Consumes the pending notice, so it appears on exactly one response.
pub fn render_page<S>(shell: &mut AppShell<S>) -> Result<String, PageError>
where
    S: CandidateStore + ?Sized,
{
    let notice = shell.take_notice().as_ref().map(NoticeView::from);
    let page = CandidatePage {
        notice,
        widgets: FormWidgets::bind(shell.form()),
        table: RecordTable::new(shell.records()),
    };
    Ok(page.render()?)
}
