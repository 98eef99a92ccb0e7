use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Vec2};
use tracing::{error, info, warn};

use focus_graph::focus::{FocusConfig, FocusController};
use focus_graph::graph::{Graph, load_graph, sample_graph};

mod canvas;
mod input;
mod render_utils;
mod ui;

#[derive(Clone, Debug)]
pub enum GraphSource {
    File(PathBuf),
    Sample,
}

impl GraphSource {
    fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Sample => "built-in sample".to_owned(),
        }
    }

    fn load(&self) -> anyhow::Result<Graph> {
        match self {
            Self::File(path) => load_graph(path),
            Self::Sample => Ok(sample_graph()?),
        }
    }
}

pub struct FocusGraphApp {
    source: GraphSource,
    config: FocusConfig,
    state: AppState,
    reload_rx: Option<Receiver<Result<Graph, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Graph, String>>,
    },
    Ready(Box<FocusView>),
    Error(String),
}

struct FocusView {
    controller: FocusController,
    config: FocusConfig,
    pan: Vec2,
    zoom: f32,
    drawn_node_count: usize,
    drawn_edge_count: usize,
}

impl FocusGraphApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        source: GraphSource,
        config: FocusConfig,
    ) -> Self {
        let state = Self::start_load(source.clone());
        Self {
            source,
            config,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(source: GraphSource) -> Receiver<Result<Graph, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = source.load().map_err(|error| format!("{error:#}"));
            if tx.send(result).is_err() {
                warn!("graph loaded after the viewer stopped listening");
            }
        });

        rx
    }

    fn start_load(source: GraphSource) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(source),
        }
    }

    fn ready_state(&self, result: Result<Graph, String>) -> AppState {
        let graph = match result {
            Ok(graph) => graph,
            Err(error) => {
                error!(%error, "failed to load graph");
                return AppState::Error(error);
            }
        };

        info!(
            source = %self.source.label(),
            nodes = graph.len(),
            edges = graph.edges().len(),
            "graph ready"
        );
        match FocusController::new(Arc::new(graph), self.config) {
            Ok(controller) => AppState::Ready(Box::new(FocusView::new(controller))),
            Err(error) => AppState::Error(error.to_string()),
        }
    }
}

impl FocusView {
    fn new(controller: FocusController) -> Self {
        Self {
            config: controller.config(),
            controller,
            pan: Vec2::ZERO,
            zoom: 1.0,
            drawn_node_count: 0,
            drawn_edge_count: 0,
        }
    }
}

impl eframe::App for FocusGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                let received = rx.try_recv();
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
                ctx.request_repaint();

                match received {
                    Ok(result) => transition = Some(self.ready_state(result)),
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => {
                        transition = Some(AppState::Error(
                            "Background load worker disconnected".to_owned(),
                        ));
                    }
                }
            }
            AppState::Error(error) => {
                let mut retry = false;
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to show the graph");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    retry = ui.button("Retry").clicked();
                });
                if retry {
                    transition = Some(Self::start_load(self.source.clone()));
                }
            }
            AppState::Ready(view) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                let source_label = self.source.label();

                let shown = view.show(ctx, &source_label, &mut reload_requested, is_reloading);
                if let Err(error) = shown {
                    error!(%error, "focus view aborted");
                    transition = Some(AppState::Error(error.to_string()));
                } else {
                    self.config = view.config;
                }

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.source.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => transition = Some(self.ready_state(result)),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "Background load worker disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
