mod colors;
mod drawing;
mod transform;

use crate::colors::BACKGROUND_COLOR;
use crate::drawing::arena::draw_arena;
use crate::transform::Transform;
use anyhow::{anyhow, Context};
use arena_core::geometry::RenderConfig;
use arena_core::grid::standard_arenas::StandardArena;
use arena_core::grid::TileGrid;
use eframe::egui;
use eframe::egui::{Pos2, Vec2, ViewportBuilder, Visuals};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Maze arena gui starting up");

    let grid = StandardArena::Classic
        .tile_grid()
        .context("compiled-in arena failed to parse")?;
    let config = RenderConfig::default();

    // the window shows the whole arena at native tile scale
    let window_size = Vec2::new(
        grid.width() as f32 * config.tile_size,
        grid.height() as f32 * config.tile_size,
    );
    info!(
        "Rendering {}x{} arena in a {}x{} window",
        grid.width(),
        grid.height(),
        window_size.x,
        window_size.y
    );

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Maze Arena",
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, grid, config)))),
    )
    .map_err(|e| anyhow!("failed to run the gui: {e}"))
}

/// Stores all the data needed for the application
pub struct App {
    grid: TileGrid,
    config: RenderConfig,
    world_to_screen: Transform,
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>, grid: TileGrid, config: RenderConfig) -> Self {
        cc.egui_ctx
            .style_mut(|style| style.visuals = Visuals::dark());

        Self {
            grid,
            config,
            world_to_screen: Transform::new_letterboxed(
                Pos2::new(0.0, 0.0),
                Pos2::new(0.0, 1.0),
                Pos2::new(0.0, 0.0),
                Pos2::new(0.0, 1.0),
            ),
        }
    }

    /// Size of the arena in world pixels.
    fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.grid.width() as f32 * self.config.tile_size,
            self.grid.height() as f32 * self.config.tile_size,
        )
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND_COLOR))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let world = self.world_size();
                self.world_to_screen = Transform::new_letterboxed(
                    Pos2::new(0.0, 0.0),
                    Pos2::new(world.x, world.y),
                    rect.left_top(),
                    rect.right_bottom(),
                );

                let painter = ui.painter_at(rect);
                draw_arena(&painter, &self.world_to_screen, &self.grid, &self.config);
            });

        ctx.request_repaint();
    }
}
