use std::collections::HashMap;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use raylib::prelude::*;
use tracing::{info, warn};

mod engine;
mod mail_client;
mod pages;
mod slide;
mod texture_loader;
mod widgets;

use hrm_showcase::assets::{load_sorted_image_paths, resolve_images};
use hrm_showcase::clock::{ManualClock, SystemClock};
use hrm_showcase::config::{self, Config};
use hrm_showcase::contact::ContactSubmission;
use hrm_showcase::content;
use hrm_showcase::gallery::Gallery;
use hrm_showcase::rotation::RotationController;

use crate::engine::{AppClock, Effect, FrameInput, Page};
use crate::mail_client::MailClient;
use crate::pages::{AboutPage, ContactPage, GalleryPage, HomePage};
use crate::slide::Slide;
use crate::texture_loader::load_textures;

const NAV_HEIGHT: f32 = 60.0;
const NOTICE_SECONDS: f32 = 2.5;

#[derive(Parser, Debug)]
#[command(name = "hrm-showcase", about = "Human Rights Movement showcase: home, about, gallery and contact pages")]
struct Cli {
    /// Settings file (defaults to ./settings.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the hero and gallery images
    #[arg(long)]
    images: Option<PathBuf>,

    /// Page shown at startup
    #[arg(long, value_enum, default_value_t = StartPage::Home)]
    page: StartPage,

    /// Follow the wall clock instead of stepping a fixed frame time
    #[arg(long)]
    realtime: bool,

    /// Write the effective settings to this file and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum StartPage {
    Home,
    About,
    Gallery,
    Contact,
}

fn nav_areas(count: usize) -> Vec<Rectangle> {
    (0..count)
        .map(|i| Rectangle::new(20.0 + i as f32 * 130.0, 10.0, 120.0, NAV_HEIGHT - 20.0))
        .collect()
}

/// Wanted image paths plus the directory listing used to fill gaps.
fn image_sources(image_dir: Option<&Path>) -> Vec<PathBuf> {
    let Some(dir) = image_dir else {
        return Vec::new();
    };
    match load_sorted_image_paths(dir) {
        Ok(paths) => {
            info!(count = paths.len(), ?dir, "found images");
            paths
        }
        Err(e) => {
            warn!("{e}, pictures will be drawn as placeholders");
            Vec::new()
        }
    }
}

fn build_pages(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &Config,
    clock: &AppClock,
) -> Vec<Box<dyn Page>> {
    let width = config.window.width as f32;
    let height = config.window.height as f32;
    let image_dir = config.content.image_dir.as_deref();
    let fallback = image_sources(image_dir);
    let timing = config.rotation_timing();

    // --- Home: hero carousel ---
    let hero = content::hero_slides();
    let wanted: Vec<PathBuf> = hero
        .iter()
        .map(|slide| image_dir.map(|dir| dir.join(slide.file_name)).unwrap_or_default())
        .collect();
    let textures = load_textures(rl, thread, &resolve_images(&wanted, &fallback));
    let slides: Vec<Slide> = hero
        .iter()
        .zip(textures)
        .map(|(slide, texture)| Slide::new(texture, slide.title, slide.description))
        .collect();
    let home_carousel = RotationController::new(slides.len(), clock.clone(), timing);

    // --- About: testimonials ---
    let testimonials = content::testimonials();
    let about_carousel = RotationController::new(testimonials.len(), clock.clone(), timing);

    // --- Gallery ---
    let items = content::gallery_items(image_dir);
    let wanted: Vec<PathBuf> = items.iter().map(|item| item.image.clone().unwrap_or_default()).collect();
    let textures: HashMap<_, _> = items
        .iter()
        .map(|item| item.id)
        .zip(load_textures(rl, thread, &resolve_images(&wanted, &fallback)))
        .filter_map(|(id, texture)| texture.map(|t| (id, t)))
        .collect();

    // --- Contact ---
    let settings = config.submission_settings();
    let recipient = settings.recipient.clone();
    let submission = ContactSubmission::new(clock.clone(), settings);

    vec![
        Box::new(HomePage::new(slides, home_carousel, width, height)),
        Box::new(AboutPage::new(testimonials, about_carousel, width, height)),
        Box::new(GalleryPage::new(Gallery::new(items), textures, width, height)),
        Box::new(ContactPage::new(submission, recipient, width)),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("hrm_showcase=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config::load_or_default(cli.config.as_deref()).context("loading settings")?;
    if let Some(images) = cli.images {
        config.content.image_dir = Some(images);
    }

    if let Some(path) = cli.write_config {
        config::save_to_path(&config, &path).with_context(|| format!("writing {}", path.display()))?;
        info!(?path, "settings written");
        return Ok(());
    }

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title("Human Rights Movement - Sri Lanka Law College")
        .vsync()
        .build();
    rl.set_target_fps(config.fps());
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape belongs to the lightbox, not the window
    rl.set_exit_key(None);

    let clock = if cli.realtime {
        AppClock::Wall(SystemClock::new())
    } else {
        AppClock::Stepped(ManualClock::new())
    };

    let mut pages = build_pages(&mut rl, &thread, &config, &clock);
    let mut current = cli.page as usize;
    let mail_client = MailClient::for_platform();
    let mut notice: Option<(String, f32)> = None;
    let frame_time = 1.0 / config.fps() as f32;
    let idle_input = FrameInput::default();

    info!(page = pages[current].title(), realtime = cli.realtime, "showcase started");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = if cli.realtime { rl.get_frame_time() } else { frame_time };
        clock.step(dt);

        // --- Update Logic ---
        let input = FrameInput::capture(&mut rl);

        if !pages[current].captures_text() {
            let digit_keys = [KeyboardKey::KEY_ONE, KeyboardKey::KEY_TWO, KeyboardKey::KEY_THREE, KeyboardKey::KEY_FOUR];
            if let Some(index) = digit_keys.iter().position(|key| input.pressed(*key)) {
                current = index;
            }
        }
        if let Some(index) = nav_areas(pages.len()).iter().position(|area| input.clicked_in(*area)) {
            current = index;
        }

        // Pages off screen keep their timers running with no input
        let mut effects = Vec::new();
        for (i, page) in pages.iter_mut().enumerate() {
            let page_input = if i == current { &input } else { &idle_input };
            effects.extend(page.update(page_input, dt));
        }

        for effect in effects {
            match effect {
                Effect::CopyToClipboard(text) => {
                    let _ = rl.set_clipboard_text(&text);
                }
                Effect::OpenUri(uri) => {
                    if let Err(e) = mail_client.open(&uri) {
                        warn!("could not open mail client: {e}");
                        notice = Some(("No mail client available".to_string(), NOTICE_SECONDS));
                    }
                }
                Effect::Notify(message) => notice = Some((message, NOTICE_SECONDS)),
            }
        }
        if let Some((_, remaining)) = notice.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                notice = None;
            }
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(widgets::NAVY);

        pages[current].draw(&mut d);

        d.draw_rectangle(0, 0, config.window.width, NAV_HEIGHT as i32, widgets::PANEL);
        for (i, area) in nav_areas(pages.len()).into_iter().enumerate() {
            let hovered = area.check_collision_point_rec(input.mouse);
            widgets::draw_button(&mut d, area, pages[i].title(), i == current, hovered);
        }
        d.draw_text("HRM", config.window.width - 90, 18, 26, widgets::GOLD);

        if let Some((message, _)) = &notice {
            let y = config.window.height - 50;
            d.draw_rectangle(0, y - 10, config.window.width, 50, widgets::PANEL);
            d.draw_text(message, 20, y, 20, widgets::TEXT);
        }
    } // End main loop

    Ok(())
}
