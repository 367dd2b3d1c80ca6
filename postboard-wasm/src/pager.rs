/// Кнопка пагинатора: "в начало", "назад", номер страницы, "вперёд", "в конец".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PagerButton {
    pub(crate) label: String,
    pub(crate) target: usize,
    pub(crate) disabled: bool,
    pub(crate) current: bool,
}

impl PagerButton {
    fn nav(label: &str, target: usize, disabled: bool) -> Self {
        Self {
            label: label.to_string(),
            target,
            disabled,
            current: false,
        }
    }
}

pub(crate) fn pager_buttons(page: usize, count: usize) -> Vec<PagerButton> {
    let at_start = page <= 1 || count == 0;
    let at_end = page >= count;

    let mut buttons = vec![
        PagerButton::nav("«", 1, at_start),
        PagerButton::nav("‹", page.saturating_sub(1).max(1), at_start),
    ];
    buttons.extend((1..=count).map(|number| PagerButton {
        label: number.to_string(),
        target: number,
        disabled: false,
        current: number == page,
    }));
    buttons.push(PagerButton::nav("›", (page + 1).min(count.max(1)), at_end));
    buttons.push(PagerButton::nav("»", count.max(1), at_end));
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_disables_backward_buttons() {
        let buttons = pager_buttons(1, 3);

        assert_eq!(buttons.len(), 7);
        assert!(buttons[0].disabled && buttons[1].disabled);
        assert!(buttons[2].current);
        assert!(!buttons[5].disabled);
        assert_eq!(buttons[5].target, 2);
        assert_eq!(buttons[6].target, 3);
    }

    #[test]
    fn last_page_disables_forward_buttons() {
        let buttons = pager_buttons(3, 3);

        assert_eq!(buttons[1].target, 2);
        assert!(buttons[4].current);
        assert!(buttons[5].disabled && buttons[6].disabled);
    }

    #[test]
    fn empty_list_has_only_disabled_navigation() {
        let buttons = pager_buttons(1, 0);

        assert_eq!(buttons.len(), 4);
        assert!(buttons.iter().all(|b| b.disabled));
    }
}
