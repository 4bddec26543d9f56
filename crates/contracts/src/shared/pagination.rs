//! Окно пагинации для серверных списков.

/// Положение текущей страницы в серверном списке.
///
/// Страницы нумеруются с 1, как в query-параметре `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.limit).max(1)
    }

    /// Номер первой показанной записи (0 для пустого списка)
    pub fn first_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            ((self.page - 1) * self.limit + 1).min(self.total)
        }
    }

    pub fn last_item(&self) -> usize {
        (self.page * self.limit).min(self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Подпись под таблицей: `Mostrando 1-10 de 25`
    pub fn label(&self) -> String {
        format!(
            "Mostrando {}-{} de {}",
            self.first_item(),
            self.last_item(),
            self.total
        )
    }

    /// Номера страниц для кнопок: окно шириной `max` вокруг текущей
    pub fn visible_pages(&self, max: usize) -> Vec<usize> {
        let total = self.total_pages();
        let max = max.max(1);
        if total <= max {
            return (1..=total).collect();
        }
        let half = max / 2;
        let mut start = self.page.saturating_sub(half).max(1);
        if start + max - 1 > total {
            start = total + 1 - max;
        }
        (start..start + max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_25() {
        let w = PageWindow::new(1, 10, 25);
        assert_eq!(w.total_pages(), 3);
        assert_eq!(w.label(), "Mostrando 1-10 de 25");
        assert!(!w.has_prev());
        assert!(w.has_next());
    }

    #[test]
    fn test_last_page_of_25() {
        let w = PageWindow::new(3, 10, 25);
        assert_eq!(w.label(), "Mostrando 21-25 de 25");
        assert!(w.has_prev());
        assert!(!w.has_next());
    }

    #[test]
    fn test_empty() {
        let w = PageWindow::new(1, 10, 0);
        assert_eq!(w.total_pages(), 1);
        assert_eq!(w.label(), "Mostrando 0-0 de 0");
        assert!(!w.has_next());
    }

    #[test]
    fn test_visible_pages() {
        assert_eq!(PageWindow::new(1, 10, 25).visible_pages(5), vec![1, 2, 3]);
        assert_eq!(PageWindow::new(1, 5, 100).visible_pages(5), vec![1, 2, 3, 4, 5]);
        assert_eq!(PageWindow::new(10, 5, 100).visible_pages(5), vec![8, 9, 10, 11, 12]);
        assert_eq!(PageWindow::new(20, 5, 100).visible_pages(5), vec![16, 17, 18, 19, 20]);
    }
}
