use chrono::NaiveDate;
use std::fmt;

/// Inclusive calendar date range driving one index traversal
///
/// The reference pipeline crawls one day at a time, so a range is usually
/// expanded into single-day windows before being handed to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CrawlWindow {
    /// Creates a window covering `start..=end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a window covering a single calendar day
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Expands the window into one single-day window per calendar day
    ///
    /// Yields nothing when `start > end`.
    pub fn days(&self) -> impl Iterator<Item = CrawlWindow> {
        let end = self.end;
        self.start
            .iter_days()
            .take_while(move |d| *d <= end)
            .map(CrawlWindow::single_day)
    }

    /// Number of calendar days covered by this window
    pub fn day_count(&self) -> u64 {
        if self.start > self.end {
            return 0;
        }
        (self.end - self.start).num_days() as u64 + 1
    }
}

impl fmt::Display for CrawlWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

/// Position of an index traversal within a window's pagination
///
/// Page numbers are 1-based. Only the index crawler mutates the cursor,
/// through [`PageCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_num: u32,
    max_pages: u32,
}

impl PageCursor {
    /// Creates a cursor positioned on page 1
    pub fn new(max_pages: u32) -> Self {
        Self {
            page_num: 1,
            max_pages: max_pages.max(1),
        }
    }

    /// The page the cursor currently points at
    pub fn page_num(&self) -> u32 {
        self.page_num
    }

    /// The page budget for this traversal
    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Advances to the next page if the traversal may continue
    ///
    /// `next_hint` is the page number announced by the listing's next-page
    /// control. The cursor moves only when the hint is strictly greater than
    /// the current page and the current page is still below the budget;
    /// otherwise the traversal has reached a terminal state.
    pub fn advance(&mut self, next_hint: u32) -> bool {
        if next_hint > self.page_num && self.page_num < self.max_pages {
            self.page_num += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_window() {
        let window = CrawlWindow::single_day(date(2024, 1, 1));
        assert_eq!(window.start, window.end);
        assert_eq!(window.day_count(), 1);
        assert_eq!(window.days().count(), 1);
    }

    #[test]
    fn test_range_expands_to_days() {
        let window = CrawlWindow::new(date(2024, 1, 1), date(2024, 1, 4));
        let days: Vec<_> = window.days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], CrawlWindow::single_day(date(2024, 1, 1)));
        assert_eq!(days[3], CrawlWindow::single_day(date(2024, 1, 4)));
    }

    #[test]
    fn test_range_spanning_month_boundary() {
        let window = CrawlWindow::new(date(2024, 1, 30), date(2024, 2, 2));
        assert_eq!(window.day_count(), 4);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let window = CrawlWindow::new(date(2024, 1, 10), date(2024, 1, 1));
        assert_eq!(window.day_count(), 0);
        assert_eq!(window.days().count(), 0);
    }

    #[test]
    fn test_display() {
        let single = CrawlWindow::single_day(date(2024, 1, 1));
        assert_eq!(single.to_string(), "2024-01-01");

        let range = CrawlWindow::new(date(2024, 1, 1), date(2024, 1, 3));
        assert_eq!(range.to_string(), "2024-01-01..2024-01-03");
    }

    #[test]
    fn test_cursor_starts_at_page_one() {
        let cursor = PageCursor::new(100);
        assert_eq!(cursor.page_num(), 1);
        assert_eq!(cursor.max_pages(), 100);
    }

    #[test]
    fn test_cursor_advances_on_greater_hint() {
        let mut cursor = PageCursor::new(100);
        assert!(cursor.advance(2));
        assert_eq!(cursor.page_num(), 2);
    }

    #[test]
    fn test_cursor_halts_on_equal_hint() {
        let mut cursor = PageCursor::new(100);
        assert!(!cursor.advance(1));
        assert_eq!(cursor.page_num(), 1);
    }

    #[test]
    fn test_cursor_halts_on_smaller_hint() {
        let mut cursor = PageCursor::new(100);
        assert!(cursor.advance(2));
        assert!(!cursor.advance(1));
        assert_eq!(cursor.page_num(), 2);
    }

    #[test]
    fn test_cursor_respects_page_budget() {
        let mut cursor = PageCursor::new(3);
        assert!(cursor.advance(2));
        assert!(cursor.advance(3));
        assert_eq!(cursor.page_num(), 3);

        // At the budget: a forward hint no longer advances
        assert!(!cursor.advance(4));
        assert_eq!(cursor.page_num(), 3);
    }

    #[test]
    fn test_cursor_bounded_for_any_hint_sequence() {
        let mut cursor = PageCursor::new(10);
        let mut steps = 0;
        while cursor.advance(cursor.page_num() + 1) {
            steps += 1;
        }
        assert_eq!(steps, 9);
        assert_eq!(cursor.page_num(), 10);
    }

    #[test]
    fn test_zero_max_pages_clamped() {
        let cursor = PageCursor::new(0);
        assert_eq!(cursor.max_pages(), 1);
    }
}
