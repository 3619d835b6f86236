use egui::{Align, Layout, RichText};

use crate::geometry::{CenterKind, GeneratorConfig, TriangleGenerator};
use crate::quiz::{Challenge, Quiz, ROUNDS};
use crate::ranking::{load_ranking, Ranking, ScoreStore, StorageScoreStore};
use crate::rendering::{center_color, render_scene, PainterRenderer, PlaneTransform, Scene};

pub const DEFAULT_PLANE_SIZE: f64 = 600.0;

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct QuizApp {
    plane_width: f64,
    plane_height: f64,
    generator: GeneratorConfig,
    show_ranking: bool,

    #[serde(skip)]
    quiz: Quiz,
    #[serde(skip)]
    ranking: Ranking,
    #[serde(skip)]
    player_name: String,
    #[serde(skip)]
    name_submitted: bool,
    #[serde(skip)]
    highlight: Option<CenterKind>,
    #[serde(skip)]
    last_error: Option<String>,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self {
            plane_width: DEFAULT_PLANE_SIZE,
            plane_height: DEFAULT_PLANE_SIZE,
            generator: GeneratorConfig::default(),
            show_ranking: false,
            quiz: Quiz::Idle,
            ranking: Ranking::default(),
            player_name: String::new(),
            name_submitted: false,
            highlight: None,
            last_error: None,
        }
    }
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        if let Some(storage) = cc.storage {
            if let Some(restored) = eframe::get_value::<QuizApp>(storage, eframe::APP_KEY) {
                app = restored;
            }
            app.ranking = load_ranking(storage);
            log::info!("restored ranking with {} entries", app.ranking.entries().len());
        }

        let now = cc.egui_ctx.input(|i| i.time);
        app.new_game(now);
        app
    }

    fn new_game(&mut self, now: f64) {
        let generator = TriangleGenerator::new(self.generator);
        match Challenge::generate(
            &generator,
            &mut rand::rng(),
            self.plane_width,
            self.plane_height,
        ) {
            Ok(challenge) => {
                self.quiz = Quiz::start(challenge, now);
                self.last_error = None;
            }
            Err(err) => {
                log::error!("could not start a game: {err}");
                self.quiz = Quiz::Idle;
                self.last_error = Some(err.to_string());
            }
        }
        self.player_name.clear();
        self.name_submitted = false;
        self.highlight = None;
    }

    fn submit_name(&mut self, frame: &mut eframe::Frame) {
        self.name_submitted = true;
        self.show_ranking = true;

        let score = self.quiz.score();
        match self.ranking.insert(&self.player_name, score) {
            Some(rank) => log::info!("{} ranked #{rank} with {score}", self.player_name.trim()),
            None => {
                log::debug!("score {score} not recorded");
                return;
            }
        }

        if let Some(storage) = frame.storage_mut() {
            StorageScoreStore::new(storage).save(&self.ranking);
        }
    }

    fn instruction(&self) -> String {
        match &self.quiz {
            Quiz::Idle => "Press \"New game\" to start".to_owned(),
            Quiz::Round(round) => format!(
                "Round {}/{ROUNDS}: click the {}",
                round.number(),
                round.target()
            ),
            Quiz::Finished(summary) => format!("Final score: {}", summary.score()),
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame, now: f64) {
        ui.horizontal(|ui| {
            if ui.button("New game").clicked() {
                self.new_game(now);
            }
            ui.toggle_value(&mut self.show_ranking, "Show ranking");
        });

        ui.separator();
        ui.label(RichText::new(self.instruction()).heading());
        ui.label(format!("Score: {}", self.quiz.score()));
        if let Some(err) = &self.last_error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }

        if !self.quiz.results().is_empty() {
            ui.separator();
            let finished = self.quiz.is_finished();
            for result in self.quiz.results() {
                let text = RichText::new(format!(
                    "{} {}: {} pts ({:.0} px, {:.1}s)",
                    result.kind.symbol(),
                    result.kind,
                    result.points,
                    result.distance,
                    result.elapsed
                ))
                .color(center_color(result.kind));

                if finished {
                    let selected = self.highlight == Some(result.kind);
                    if ui.selectable_label(selected, text).clicked() {
                        self.highlight = if selected { None } else { Some(result.kind) };
                    }
                } else {
                    ui.label(text);
                }
            }
        }

        if self.quiz.is_finished() && !self.name_submitted {
            ui.separator();
            ui.label("Game over! Enter your name:");
            let response = ui.text_edit_singleline(&mut self.player_name);
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() || entered {
                    self.submit_name(frame);
                }
                if ui.button("Skip").clicked() {
                    self.name_submitted = true;
                    self.show_ranking = true;
                }
            });
        }

        if self.show_ranking {
            ui.separator();
            ui.heading("Ranking");
            if self.ranking.is_empty() {
                ui.label("No scores yet");
            }
            ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                for line in self.ranking.lines() {
                    ui.label(line);
                }
            });
        }
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui, now: f64) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let transform = PlaneTransform::new(self.plane_width, self.plane_height, response.rect);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let point = transform.to_plane(pos);
                if transform.contains(point) {
                    self.quiz = std::mem::take(&mut self.quiz).click(point, now);
                }
            }
        }

        if let Some(scene) = Scene::from_quiz(&self.quiz, self.highlight) {
            render_scene(&mut PainterRenderer::new(&painter, transform), &scene);
        }
    }
}

impl eframe::App for QuizApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
        StorageScoreStore::new(storage).save(&self.ranking);
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Triangle centers");
            ui.label("Find the centroid, circumcenter, incenter and orthocenter. Be quick and precise.");
        });

        egui::SidePanel::left("controls").show(ctx, |ui| {
            self.controls_ui(ui, frame, now);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas_ui(ui, now);
        });

        if ctx.input(|i| {
            i.key_pressed(egui::Key::N) && i.modifiers.matches_logically(egui::Modifiers::CTRL)
        }) {
            self.new_game(now);
        }
    }
}
