use crate::config::{Config, Theme};
use crate::constant::DEFAULT_WINDOW_TITLE;
use crate::loader::{DocumentSlot, LoaderMessage, LoaderResponse, spawn_loader};
use crate::session::{DiffSession, SessionEvent};
use crate::style::configure_style;
use crate::ui::diff_view::render_diff_view;
use crate::ui::editor::Editor;
use crate::ui::toolbar::{Toolbar, ToolbarAction, ToolbarState};
use egui::{Key, RichText};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;
use tracing::{debug, error, warn};

pub struct SideDiffApp {
    session: DiffSession,
    session_events: Receiver<SessionEvent>,
    editor: Editor,
    config: Config,
    loader_sender: Sender<LoaderMessage>,
    loader_receiver: Receiver<LoaderResponse>,
    /// Row to bring into view on the next frame
    pending_scroll: Option<usize>,
    status: Option<String>,
    title: String,
}

impl SideDiffApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        baseline: Option<PathBuf>,
        working: Option<PathBuf>,
    ) -> Self {
        let config = Config::default();
        configure_style(&cc.egui_ctx, config.settings.theme);

        let mut session = DiffSession::new(config.settings.diff_options());
        let session_events = session.subscribe();
        let (loader_sender, loader_receiver) = spawn_loader();

        let app = Self {
            session,
            session_events,
            editor: Editor::default(),
            config,
            loader_sender,
            loader_receiver,
            pending_scroll: None,
            status: None,
            title: DEFAULT_WINDOW_TITLE.to_string(),
        };

        for (slot, path) in [
            (DocumentSlot::Baseline, baseline),
            (DocumentSlot::Working, working),
        ] {
            if let Some(path) = path {
                app.request_open(slot, path);
            }
        }

        app
    }

    fn request_open(&self, slot: DocumentSlot, path: PathBuf) {
        if let Err(e) = self.loader_sender.send(LoaderMessage::Open(slot, path)) {
            error!("Failed to send open message: {}", e);
        }
    }

    fn open_dialog(&self, slot: DocumentSlot) {
        let sender = self.loader_sender.clone();
        let data_dir = self.config.data_dir();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_directory(&data_dir)
                .add_filter("Text", &["json", "txt", "md", "toml", "yaml", "yml"])
                .add_filter("All files", &["*"])
                .pick_file()
                && let Err(e) = sender.send(LoaderMessage::Open(slot, path))
            {
                error!("Failed to send open message: {}", e);
            }
        });
    }

    fn poll_loader(&mut self) {
        while let Ok(response) = self.loader_receiver.try_recv() {
            match response {
                LoaderResponse::Loaded {
                    slot,
                    path,
                    content,
                } => {
                    match slot {
                        DocumentSlot::Baseline => {
                            self.session.set_baseline(content);
                        }
                        DocumentSlot::Working => {
                            self.editor.set_content(content.as_str());
                            self.session.set_working(content);
                        }
                    }
                    self.config.add_recent_file(path);
                    self.status = None;
                }
                LoaderResponse::Failed { error, .. } => {
                    self.status = Some(error);
                }
            }
        }
    }

    fn poll_session(&mut self) {
        while let Ok(event) = self.session_events.try_recv() {
            match event {
                SessionEvent::Navigated { row, .. } => self.pending_scroll = Some(row),
                SessionEvent::Recomputed {
                    row_count,
                    hunk_count,
                } => {
                    debug!(row_count, hunk_count, "Diff view refreshed");
                }
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (next, previous) = ctx.input(|i| {
            let f7 = i.key_pressed(Key::F7);
            (f7 && !i.modifiers.shift, f7 && i.modifiers.shift)
        });
        if next {
            self.session.next_hunk();
        } else if previous {
            self.session.previous_hunk();
        }
    }

    fn apply_action(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        match action {
            ToolbarAction::Open(slot) => self.open_dialog(slot),
            ToolbarAction::OpenRecent(slot, path) => self.request_open(slot, path),
            ToolbarAction::PreviousHunk => {
                self.session.previous_hunk();
            }
            ToolbarAction::NextHunk => {
                self.session.next_hunk();
            }
            ToolbarAction::SetBaseline => {
                self.session.promote_working();
            }
            ToolbarAction::ResetToBaseline => {
                self.session.restore_baseline();
                self.editor.set_content(self.session.working());
            }
            ToolbarAction::SetAlgorithm(algorithm) => {
                self.config.settings.diff_algorithm = algorithm;
                self.session.set_options(self.config.settings.diff_options());
                self.save_settings();
            }
            ToolbarAction::ToggleInlineHighlight => {
                self.config.settings.inline_highlight = !self.config.settings.inline_highlight;
                self.session.set_options(self.config.settings.diff_options());
                self.save_settings();
            }
            ToolbarAction::ToggleTheme => {
                self.config.settings.theme = match self.config.settings.theme {
                    Theme::Light => Theme::Dark,
                    Theme::Dark => Theme::Light,
                };
                configure_style(ctx, self.config.settings.theme);
                self.save_settings();
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.config.save() {
            warn!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for SideDiffApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();
        self.handle_shortcuts(ctx);

        let font_size = self.config.settings.font_size;

        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            let state = ToolbarState {
                stats: self.session.stats(),
                cursor: self.session.cursor(),
                has_baseline: self.session.has_baseline(),
                recent_files: &self.config.settings.recent_files,
                algorithm: self.config.settings.diff_algorithm,
                inline_highlight: self.config.settings.inline_highlight,
                theme: self.config.settings.theme,
            };
            if let Some(action) = Toolbar::show(ui, state) {
                self.apply_action(ctx, action);
            }
        });

        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
                let color = ui.visuals().error_fg_color;
                ui.label(RichText::new(status).color(color));
            });
        }

        egui::SidePanel::left("working_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label(RichText::new("Working copy").strong());
                egui::ScrollArea::vertical()
                    .id_salt("working_scroll")
                    .show(ui, |ui| {
                        if self.editor.show(ui, font_size) {
                            self.session.set_working(self.editor.content());
                        }
                    });
            });

        // Navigation events from this frame's input decide where to scroll
        self.poll_session();
        let scroll_to = self.pending_scroll.take();

        egui::CentralPanel::default().show(ctx, |ui| {
            render_diff_view(ui, &self.session, scroll_to, font_size);
        });

        let title = window_title(&self.session);
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }

        // Background loads report over a channel, keep polling it
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

fn window_title(session: &DiffSession) -> String {
    let stats = session.stats();
    if stats.has_changes {
        format!(
            "{} (+{} -{})",
            DEFAULT_WINDOW_TITLE, stats.added_count, stats.removed_count
        )
    } else {
        DEFAULT_WINDOW_TITLE.to_string()
    }
}
