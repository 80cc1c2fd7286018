use {
  anyhow::Context,
  app::App,
  arguments::Arguments,
  autoplay::Autoplay,
  breakpoints::{Breakpoints, Step},
  card::Card,
  catalog::Catalog,
  categorized::Categorized,
  clap::Parser,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      DisableFocusChange, EnableFocusChange, Event as CrosstermEvent, KeyCode,
      KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  deck::Deck,
  deck_spec::DeckSpec,
  detail_view::DetailView,
  edge_behavior::EdgeBehavior,
  effect::Effect,
  event::Event,
  help_view::HelpView,
  mode::Mode,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
  },
  resize_debounce::ResizeDebounce,
  serde::Deserialize,
  showcase::Showcase,
  showcase_error::ShowcaseError,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
    time::sleep,
  },
  tracing::{debug, info},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{format_price, truncate, wrap_text},
  window::Window,
};

mod app;
mod arguments;
mod autoplay;
mod breakpoints;
mod card;
mod catalog;
mod categorized;
mod command;
mod command_dispatch;
mod deck;
mod deck_spec;
mod detail_view;
mod edge_behavior;
mod effect;
mod event;
mod filter;
mod help_view;
mod logging;
mod mode;
mod resize_debounce;
mod showcase;
mod showcase_error;
mod state;
mod transient_message;
mod utils;
mod window;

const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

const MESSAGE_TTL: Duration = Duration::from_secs(3);

const RESIZE_SETTLE: Duration = Duration::from_millis(150);

const BROWSE_STATUS: &str = "←/h prev • →/l next • 1-9 jump • c filter • a autoplay • tab deck • enter detail • q quit • ? help";

const DETAIL_STATUS: &str =
  "esc/enter close • o open link • q quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous window
  → / l   next window
  1-9     jump straight to a window
  home    first window
  end     last window
  tab     next deck
  s-tab   previous deck
  [ / ]   previous / next deck

Filters:
  c       next category filter
  C       previous category filter

Autoplay:
  a       toggle autoplay for this deck
          (losing terminal focus pauses it)

Cards:
  enter   open the card detail
  esc     close the detail view
  o       open the card link in your browser

Other:
  q       quit
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

fn run() -> Result {
  let arguments = Arguments::parse();

  if let Some(log_file) = &arguments.log_file {
    logging::init(log_file)?;
  }

  let Catalog { breakpoints, decks } = match &arguments.catalog {
    Some(path) => Catalog::load(path)?,
    None => Catalog::sample(),
  };

  let breakpoints =
    breakpoints.map_or_else(Breakpoints::default, Breakpoints::new);

  let interval_override = arguments.interval_ms.map(Duration::from_millis);

  let decks = decks
    .into_iter()
    .map(|spec| {
      Deck::new(spec, 1, interval_override, !arguments.no_autoplay)
    })
    .collect::<Vec<Deck>>();

  info!(decks = decks.len(), "starting showcase");

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(State::new(decks, breakpoints));

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run() {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
