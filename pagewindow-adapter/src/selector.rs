use alloc::vec::Vec;

use pagewindow::clamp_page;

/// One entry of a page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageLink {
    Page { number: usize, current: bool },
    /// Skipped pages between two non-consecutive links (rendered as "...").
    Gap,
}

/// Builds the links for a page selector.
///
/// Always contains the first and last page plus every page within `padding` of the current
/// one, ascending and without duplicates. A [`PageLink::Gap`] separates non-consecutive pages.
///
/// `current=5, last=10, padding=2` gives `1 … 3 4 5 6 7 … 10`.
pub fn page_links(current: usize, last: usize, padding: usize) -> Vec<PageLink> {
    let last = last.max(1);
    let current = clamp_page(current, last);
    let start = current.saturating_sub(padding).max(1);
    let end = current.saturating_add(padding).min(last);

    let mut pages = Vec::with_capacity(end - start + 3);
    pages.push(1);
    pages.extend(start..=end);
    pages.push(last);
    pages.dedup();

    let mut links = Vec::with_capacity(pages.len() * 2);
    let mut prev: Option<usize> = None;
    for number in pages {
        if prev.is_some_and(|p| number - p > 1) {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page {
            number,
            current: number == current,
        });
        prev = Some(number);
    }
    links
}
