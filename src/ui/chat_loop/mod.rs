//! Terminal chat loop.
//!
//! Owns the [`ChatScreen`] state, reads terminal events on a background task
//! and redraws after each batch. Submissions are spawned as independent tasks,
//! so several requests may be in flight at once; each reply wakes the loop
//! through [`UiEvent::RequestRedraw`].

mod keybindings;
mod lifecycle;


use std::{
    error::Error,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;
use tui_textarea::TextArea;

use crate::core::message::ChatMessage;
use crate::core::sink::{ChatLog, MessageSink};
use crate::core::transport::{ChatTransport, HttpTransport};
use crate::core::widget::ChatWidget;
use crate::ui::input::{flatten_paste, new_input};
use crate::ui::layout::Labels;
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;

pub use keybindings::{handle_key, handle_mouse, KeyAction};
pub use lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
    RequestRedraw,
}

/// Log pane geometry recorded by the last draw, used to clamp scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub height: u16,
    pub max_offset: u16,
}

/// Forwards appends to the shared log and wakes the event loop.
pub struct NotifyingSink {
    log: Arc<ChatLog>,
    event_tx: mpsc::UnboundedSender<UiEvent>,
}

impl MessageSink for NotifyingSink {
    fn append(&self, message: ChatMessage) {
        self.log.append(message);
        let _ = self.event_tx.send(UiEvent::RequestRedraw);
    }
}

type ScreenWidget = ChatWidget<TextArea<'static>, NotifyingSink, dyn ChatTransport>;

pub struct ChatScreen {
    widget: ScreenWidget,
    log: Arc<ChatLog>,
    in_flight: Arc<AtomicUsize>,
    event_tx: mpsc::UnboundedSender<UiEvent>,
    pub theme: Theme,
    pub labels: Labels,
    pub endpoint: String,
    pub viewport: Viewport,
}

impl ChatScreen {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        endpoint: String,
        theme: Theme,
        labels: Labels,
        event_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let log = Arc::new(ChatLog::new());
        let sink = Arc::new(NotifyingSink {
            log: Arc::clone(&log),
            event_tx: event_tx.clone(),
        });
        let widget = ChatWidget::new(new_input(&theme), sink, transport);

        Self {
            widget,
            log,
            in_flight: Arc::new(AtomicUsize::new(0)),
            event_tx,
            theme,
            labels,
            endpoint,
            viewport: Viewport::default(),
        }
    }

    pub fn log(&self) -> &Arc<ChatLog> {
        &self.log
    }

    pub fn input(&self) -> &TextArea<'static> {
        self.widget.input()
    }

    pub fn input_mut(&mut self) -> &mut TextArea<'static> {
        self.widget.input_mut()
    }

    /// Requests sent but not yet answered.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit the input box. Returns `false` when there was nothing to send.
    ///
    /// The user message is rendered before this returns; the reply arrives on
    /// a spawned task.
    pub fn submit(&mut self) -> bool {
        let Some(pending) = self.widget.submit() else {
            return false;
        };

        debug!(chars = pending.text().chars().count(), "message submitted");
        let in_flight = Arc::clone(&self.in_flight);
        let event_tx = self.event_tx.clone();
        in_flight.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(async move {
            // The log already shows the failure.
            let _ = pending.resolve().await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
            let _ = event_tx.send(UiEvent::RequestRedraw);
        });
        true
    }

    pub fn paste(&mut self, text: &str) {
        let flattened = flatten_paste(text);
        self.input_mut().insert_str(flattened);
    }
}

/// Apply one event to the screen. Returns `true` when the user asked to quit.
pub fn handle_event(screen: &mut ChatScreen, event: UiEvent) -> bool {
    match event {
        UiEvent::RequestRedraw => {}
        UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            match handle_key(screen, key) {
                KeyAction::Quit => return true,
                KeyAction::Submit => {
                    screen.submit();
                }
                KeyAction::Continue => {}
            }
        }
        UiEvent::Crossterm(Event::Paste(text)) => screen.paste(&text),
        UiEvent::Crossterm(Event::Mouse(mouse)) => handle_mouse(screen, mouse),
        UiEvent::Crossterm(_) => {}
    }
    false
}

pub fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => continue,
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

/// Draw, then redraw after every batch of queued events until the user quits.
pub async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    screen: &mut ChatScreen,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(f, screen))?;

    while let Some(event) = event_rx.recv().await {
        if handle_event(screen, event) {
            return Ok(());
        }
        while let Ok(event) = event_rx.try_recv() {
            if handle_event(screen, event) {
                return Ok(());
            }
        }
        terminal.draw(|f| ui(f, screen))?;
    }

    Ok(())
}

pub struct ChatOptions {
    pub endpoint: String,
    pub theme: Theme,
    pub labels: Labels,
}

pub async fn run_chat(options: ChatOptions) -> Result<(), Box<dyn Error>> {
    let ChatOptions {
        endpoint,
        theme,
        labels,
    } = options;

    let transport: Arc<dyn ChatTransport> = Arc::new(HttpTransport::new(&endpoint));
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let mut screen = ChatScreen::new(transport, endpoint, theme, labels, event_tx.clone());

    let mut terminal = setup_terminal()?;
    let reader = spawn_event_reader(event_tx);
    debug!(endpoint = %screen.endpoint, "chat started");

    let result = event_loop(&mut terminal, &mut screen, &mut event_rx).await;

    reader.abort();
    restore_terminal(&mut terminal)?;
    result
}
