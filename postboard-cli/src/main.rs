use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use postboard_client::{GatewayError, HttpGateway, PostsGateway};
use postboard_core::{
    CommentId, DetailOutcome, DetailScreen, ListScreen, POSTS_PER_PAGE, fetch_detail, fetch_index,
};
use tracing::info;

mod logging;
mod render;
mod settings;

use logging::init_logging;
use render::{parse_confirmation, render_detail, render_list, render_not_found};
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "postboard-cli", version, about = "Консольный клиент блога (JSONPlaceholder API)")]
struct Cli {
    /// Адрес API (по умолчанию POSTBOARD_API_URL или публичный JSONPlaceholder).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Идентификатор "вошедшего" пользователя (по умолчанию POSTBOARD_USER_ID или 1).
    #[arg(long, global = true)]
    user_id: Option<i64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список постов с авторами, по 10 на страницу.
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Пост с комментариями.
    Show {
        #[arg(long)]
        id: i64,
    },
    /// Удаление своего комментария с подтверждением.
    DeleteComment {
        #[arg(long)]
        post: i64,
        #[arg(long)]
        comment: i64,
        /// Не спрашивать подтверждение.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::from_env()?.with_overrides(cli.server, cli.user_id);
    init_logging(&settings.log_level)?;
    info!(api_url = %settings.api_url, viewer = settings.viewer.logged_in_user_id, "starting");

    let gateway = HttpGateway::new(settings.api_url.clone(), settings.gateway_options())
        .map_err(map_gateway_error)?;

    match cli.command {
        Command::List { page } => list(&gateway, page).await,
        Command::Show { id } => {
            let screen = load_detail(&gateway, id, &settings).await?;
            print!("{}", render_detail(&screen));
            Ok(())
        }
        Command::DeleteComment { post, comment, yes } => {
            let mut screen = load_detail(&gateway, post, &settings).await?;
            delete_comment(&gateway, &mut screen, comment, yes).await
        }
    }
}

async fn list(gateway: &HttpGateway, page: usize) -> Result<()> {
    let mut screen = ListScreen::new(POSTS_PER_PAGE);
    screen.set_page(page);

    let ticket = screen.begin_load();
    let result = fetch_index(gateway).await;
    screen.finish_load(ticket, result);

    print!("{}", render_list(&screen));
    if let Some(error) = screen.status().error() {
        bail!("не удалось загрузить посты: {error}");
    }
    Ok(())
}

async fn load_detail(gateway: &HttpGateway, post_id: i64, settings: &Settings) -> Result<DetailScreen> {
    let mut screen = DetailScreen::new(post_id, settings.viewer.logged_in_user_id);

    let ticket = screen.begin_load();
    let result = fetch_detail(gateway, post_id).await;
    if screen.finish_load(ticket, result) == DetailOutcome::NotFound {
        print!("{}", render_not_found());
        bail!("пост {post_id} не найден");
    }
    Ok(screen)
}

/// Проверяет, что комментарий есть у поста и принадлежит зрителю.
fn ensure_deletable(screen: &DetailScreen, comment_id: CommentId) -> Result<()> {
    let Some(comment) = screen.comments().iter().find(|c| c.id == comment_id) else {
        bail!("комментарий {comment_id} не найден у поста {}", screen.post_id());
    };
    if !screen.can_delete(comment) {
        bail!("комментарий {comment_id} принадлежит другому пользователю");
    }
    Ok(())
}

async fn delete_comment<G>(
    gateway: &G,
    screen: &mut DetailScreen,
    comment_id: CommentId,
    yes: bool,
) -> Result<()>
where
    G: PostsGateway + ?Sized,
{
    ensure_deletable(screen, comment_id)?;

    screen.request_delete(comment_id);
    if !yes && !ask_confirmation()? {
        screen.cancel_delete();
        println!("Удаление отменено");
        return Ok(());
    }

    let Some(target) = screen.confirm_delete() else {
        bail!("диалог удаления не открыт");
    };
    let result = gateway.delete_comment(target).await;
    screen.finish_delete(target, result);

    if let Some(error) = screen.dialog().error() {
        bail!("не удалось удалить комментарий: {error}");
    }

    println!("Комментарий удалён: id={target}");
    print!("{}", render_detail(screen));
    Ok(())
}

fn ask_confirmation() -> Result<bool> {
    print!("Удалить комментарий? Действие нельзя отменить. [y/N]: ");
    io::stdout().flush().context("не удалось вывести вопрос")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("не удалось прочитать ответ")?;
    Ok(parse_confirmation(&answer))
}

fn map_gateway_error(err: GatewayError) -> anyhow::Error {
    let message = match err {
        GatewayError::NotFound => "ресурс не найден".to_string(),
        GatewayError::Transport(message) => format!("ошибка соединения: {message}"),
        GatewayError::Http { status, message } => format!("ошибка HTTP {status}: {message}"),
        GatewayError::Decode(message) => format!("некорректный ответ сервера: {message}"),
    };
    anyhow::anyhow!(message)
}
