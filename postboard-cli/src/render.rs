//! Текстовое представление экранов.

use postboard_core::{DetailScreen, ListScreen};

pub fn render_list(screen: &ListScreen) -> String {
    let mut out = String::from("📜 Posts\n");

    if let Some(error) = screen.status().error() {
        out.push_str(&format!("Ошибка загрузки: {error}\n"));
    }

    let posts = screen.current_posts();
    if posts.is_empty() {
        out.push_str("(на этой странице постов нет)\n");
    }
    for (index, item) in posts.iter().enumerate() {
        out.push_str(&format!(
            "#{:<4} [{}] {}",
            screen.row_number(index),
            item.post.id,
            item.post.title
        ));
        if let Some(user) = &item.user {
            out.push_str(&format!(" (автор: {})", user.name));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Страница {} из {} (всего постов: {})\n",
        screen.page(),
        screen.page_count(),
        screen.posts().len()
    ));
    out
}

pub fn render_detail(screen: &DetailScreen) -> String {
    let Some(detail) = screen.detail() else {
        return render_not_found();
    };

    let mut out = format!("{}\n\n{}\n", detail.post.title, detail.post.body);
    if let Some(author) = &detail.author {
        out.push_str(&format!("Автор: {}\n", author.name));
    }

    out.push_str("\n💬 Comments\n");
    if screen.comments().is_empty() {
        out.push_str("(комментариев нет)\n");
    }
    for comment in screen.comments() {
        let marker = if screen.can_delete(comment) {
            "  [можно удалить]"
        } else {
            ""
        };
        out.push_str(&format!("#{} {}{marker}\n    {}\n", comment.id, comment.name, comment.body));
    }
    out
}

pub fn render_not_found() -> String {
    "404\nPage Not Found\nThe page you are looking for might have been removed or is temporarily unavailable.\n"
        .to_string()
}

/// `y`/`yes`/`д`/`да` в любом регистре считаются согласием.
pub fn parse_confirmation(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "y" | "yes" | "д" | "да"
    )
}

#[cfg(test)]
mod tests {
    use postboard_core::{AuthoredPost, Post, PostDetail, RawComment, decorate_comments};

    use super::*;

    fn authored(id: i64) -> AuthoredPost {
        AuthoredPost {
            post: Post {
                id,
                user_id: 1,
                title: format!("title {id}"),
                body: String::new(),
            },
            user: None,
        }
    }

    #[test]
    fn list_shows_row_numbers_of_current_page() {
        let mut screen = ListScreen::new(10);
        let ticket = screen.begin_load();
        screen.finish_load(ticket, Ok((1..=25).map(authored).collect()));
        screen.set_page(3);

        let text = render_list(&screen);

        assert!(text.contains("#21"));
        assert!(text.contains("title 25"));
        assert!(!text.contains("title 20"));
        assert!(text.contains("Страница 3 из 3"));
    }

    #[test]
    fn list_past_last_page_is_empty() {
        let mut screen = ListScreen::new(10);
        let ticket = screen.begin_load();
        screen.finish_load(ticket, Ok((1..=5).map(authored).collect()));
        screen.set_page(2);

        assert!(render_list(&screen).contains("постов нет"));
    }

    #[test]
    fn detail_marks_only_own_comment() {
        let mut screen = DetailScreen::new(1, 1);
        let ticket = screen.begin_load();
        let comments = (1..=2)
            .map(|id| RawComment {
                id,
                post_id: 1,
                name: format!("c{id}"),
                email: String::new(),
                body: "text".to_string(),
            })
            .collect();
        screen.finish_load(
            ticket,
            Ok(PostDetail {
                post: Post {
                    id: 1,
                    user_id: 1,
                    title: "Title".to_string(),
                    body: "Body".to_string(),
                },
                author: None,
                comments: decorate_comments(comments, 0),
            }),
        );

        let text = render_detail(&screen);

        assert!(text.contains("#1 c1\n"));
        assert!(text.contains("#2 c2  [можно удалить]"));
    }

    #[test]
    fn detail_without_data_renders_not_found() {
        let screen = DetailScreen::new(1, 1);
        assert!(render_detail(&screen).starts_with("404"));
    }

    #[test]
    fn confirmation_accepts_yes_variants() {
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation(" YES "));
        assert!(parse_confirmation("да"));
        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("n"));
    }
}
