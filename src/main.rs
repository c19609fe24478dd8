//! SVG Life entry point
//!
//! On the web this wires the page controls to the shell and redraws the board
//! after every event. Natively it runs a preset headlessly and prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlInputElement};

    use svg_life::consts::{SPEED_INPUT_MAX, SPEED_INPUT_MIN, SPEED_INPUT_STEP};
    use svg_life::renderer::{DATA_X, DATA_Y};
    use svg_life::{Event, Point, Settings, Shell, Ticker};

    type AppShell = Shell<IntervalTicker>;

    /// `setInterval`-backed ticker; the callback dispatches `Event::Tick`
    struct IntervalTicker {
        callback: Closure<dyn FnMut()>,
        handle: Option<i32>,
    }

    impl IntervalTicker {
        fn new(callback: Closure<dyn FnMut()>) -> Self {
            Self {
                callback,
                handle: None,
            }
        }
    }

    impl Ticker for IntervalTicker {
        fn start(&mut self, interval_ms: u32) {
            self.stop();
            let Some(window) = web_sys::window() else {
                log::error!("No window, can't schedule ticks");
                return;
            };
            match window.set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                interval_ms as i32,
            ) {
                Ok(handle) => self.handle = Some(handle),
                Err(e) => log::error!("setInterval failed: {:?}", e),
            }
        }

        fn stop(&mut self) {
            if let Some(handle) = self.handle.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
            }
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    /// Reduce an event and redraw. Events arriving while the shell is borrowed are dropped.
    fn dispatch(shell: &Rc<RefCell<AppShell>>, event: Event) {
        let Ok(mut s) = shell.try_borrow_mut() else {
            log::warn!("Shell busy, dropped {:?}", event);
            return;
        };
        s.dispatch(event);
        render(&s);
    }

    /// Update the board and HUD elements in the DOM
    fn render(shell: &AppShell) {
        let Some(document) = document() else {
            return;
        };
        let model = shell.model();

        if let Some(board) = document.get_element_by_id("board") {
            board.set_inner_html(&shell.svg());
        }

        if let Some(el) = document.query_selector("#hud-generation .hud-value").ok().flatten() {
            el.set_text_content(Some(&model.generation.to_string()));
        }

        if let Some(el) = document.query_selector("#hud-live .hud-value").ok().flatten() {
            el.set_text_content(Some(&model.sim.live_count().to_string()));
        }

        if let Some(el) = document.query_selector("#hud-interval .hud-value").ok().flatten() {
            el.set_text_content(Some(&format!("{}ms", model.interval_ms)));
        }

        if let Some(btn) = document.get_element_by_id("start-stop-btn") {
            btn.set_text_content(Some(if model.is_running() { "Stop" } else { "Start" }));
        }

        // Lets the page style the board per run state
        if let Some(board) = document.get_element_by_id("board") {
            let class = if model.is_running() { "running" } else { "paused" };
            let _ = board.set_attribute("class", class);
        }

        if let Some(input) = document
            .get_element_by_id("speed")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value(&model.speed_input.to_string());
        }
    }

    /// Board point of a clicked shape, from its data attributes
    fn clicked_point(event: &web_sys::Event) -> Option<Point> {
        let target: Element = event.target()?.dyn_into().ok()?;
        let x = target.get_attribute(DATA_X)?.parse().ok()?;
        let y = target.get_attribute(DATA_Y)?.parse().ok()?;
        Some(Point::new(x, y))
    }

    fn on_click(
        document: &web_sys::Document,
        id: &str,
        shell: Rc<RefCell<AppShell>>,
        event: impl Fn(&AppShell) -> Event + 'static,
    ) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let next = match shell.try_borrow() {
                Ok(s) => event(&s),
                Err(_) => return,
            };
            dispatch(&shell, next);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_controls(shell: Rc<RefCell<AppShell>>) {
        let Some(document) = document() else {
            return;
        };

        on_click(&document, "start-stop-btn", shell.clone(), |s| {
            if s.model().is_running() { Event::Stop } else { Event::Start }
        });
        on_click(&document, "step-btn", shell.clone(), |_| Event::Step);
        on_click(&document, "reset-btn", shell.clone(), |_| Event::Reset);
        on_click(&document, "clear-btn", shell.clone(), |_| Event::Clear);
        on_click(&document, "random-btn", shell.clone(), |_| Event::Randomize {
            seed: js_sys::Date::now() as u64,
        });

        // Speed slider
        if let Some(input) = document
            .get_element_by_id("speed")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            let _ = input.set_attribute("min", &SPEED_INPUT_MIN.to_string());
            let _ = input.set_attribute("max", &SPEED_INPUT_MAX.to_string());
            let _ = input.set_attribute("step", &SPEED_INPUT_STEP.to_string());

            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                let raw = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value())
                    .unwrap_or_default();
                dispatch(&shell, Event::SetSpeed(raw));
            });
            let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Missing #speed");
        }

        // Cell clicks, delegated from the board container
        if let Some(board) = document.get_element_by_id("board") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                if let Some(point) = clicked_point(&event) {
                    dispatch(&shell, Event::TogglePoint(point));
                }
            });
            let _ = board.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::error!("Missing #board, nothing to draw into");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("SVG Life starting...");

        let settings = Settings::load();
        let shell: Rc<RefCell<AppShell>> = Rc::new_cyclic(|weak: &Weak<RefCell<AppShell>>| {
            let weak = weak.clone();
            let tick = Closure::<dyn FnMut()>::new(move || {
                if let Some(shell) = weak.upgrade() {
                    dispatch(&shell, Event::Tick);
                }
            });
            RefCell::new(Shell::new(settings, IntervalTicker::new(tick)))
        });

        setup_controls(shell.clone());
        render(&shell.borrow());

        // Hide loading indicator
        if let Some(loading) = document().and_then(|d| d.get_element_by_id("loading")) {
            let _ = loading.set_attribute("class", "hidden");
        }

        log::info!("SVG Life ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use clap::Parser;
    use svg_life::patterns::{PATTERNS, Pattern};
    use svg_life::renderer::board_svg;
    use svg_life::{DenseBoard, Event, Model, Settings, SimState, life};

    #[derive(Debug, Parser)]
    #[command(name = "svg-life")]
    #[command(version)]
    #[command(about = "Advance a Game of Life preset headlessly and print the board")]
    struct Cli {
        /// Number of generations to advance
        #[arg(short = 'n', long, default_value_t = 1)]
        generations: u64,

        /// Preset to start from (case-insensitive)
        #[arg(short, long, default_value = "Seed", value_parser = parse_pattern)]
        pattern: &'static Pattern,

        /// Settings file (JSON)
        #[arg(long, value_parser = parse_settings)]
        settings: Option<Settings>,

        /// Print SVG markup instead of an ASCII board
        #[arg(long)]
        svg: bool,
    }

    fn parse_pattern(name: &str) -> Result<&'static Pattern, String> {
        Pattern::find(name).ok_or_else(|| {
            let names: Vec<_> = PATTERNS.iter().map(|p| p.name).collect();
            format!("expected one of {}", names.join(", "))
        })
    }

    fn parse_settings(path: &str) -> Result<Settings, String> {
        Settings::from_path(path).map_err(|e| e.to_string())
    }

    /// Paused model holding `pattern`, stepped `generations` times
    fn simulate(pattern: &Pattern, generations: u64, settings: &Settings) -> Model {
        let mut model = Model {
            sim: SimState::Paused(pattern.board()),
            ..Model::new(settings.initial_speed_input)
        };
        for _ in 0..generations {
            model = life::reduce(model, Event::Step);
        }
        model
    }

    fn ascii(board: &DenseBoard) -> String {
        let mut out = String::new();
        for (point, alive) in board.cells() {
            out.push(if alive { '#' } else { '.' });
            if point.x == svg_life::consts::BOARD_SIZE - 1 {
                out.push('\n');
            }
        }
        out
    }

    pub fn run() {
        let cli = Cli::parse();
        let settings = cli.settings.unwrap_or_default();

        log::info!("Running {} for {} generations", cli.pattern.name, cli.generations);

        let model = simulate(cli.pattern, cli.generations, &settings);

        log::info!("Generation {}: {} live cells", model.generation, model.sim.live_count());

        if cli.svg {
            println!("{}", board_svg(&model.sim, &settings));
        } else if let SimState::Paused(board) = &model.sim {
            print!("{}", ascii(board));
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use clap::error::ErrorKind;

        fn cli(args: &[&str]) -> Result<Cli, clap::Error> {
            Cli::try_parse_from(std::iter::once("svg-life").chain(args.iter().copied()))
        }

        #[test]
        fn test_parse_defaults() {
            let parsed = cli(&[]).unwrap();
            assert_eq!(parsed.generations, 1);
            assert_eq!(parsed.pattern.name, "Seed");
            assert!(parsed.settings.is_none());
            assert!(!parsed.svg);
        }

        #[test]
        fn test_parse_flags() {
            let parsed = cli(&["-n", "12", "--pattern", "glider", "--svg"]).unwrap();
            assert_eq!(parsed.generations, 12);
            assert_eq!(parsed.pattern.name, "Glider");
            assert!(parsed.svg);
        }

        #[test]
        fn test_parse_attached_values() {
            assert_eq!(cli(&["--generations=3"]).unwrap().generations, 3);
            assert_eq!(cli(&["-n3"]).unwrap().generations, 3);
            assert_eq!(cli(&["-p=toad"]).unwrap().pattern.name, "Toad");
        }

        #[test]
        fn test_help_and_version() {
            assert_eq!(cli(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
            assert_eq!(cli(&["--version"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
        }

        #[test]
        fn test_parse_errors() {
            assert!(cli(&["--generations"]).is_err());
            assert_eq!(
                cli(&["--generations", "many"]).unwrap_err().kind(),
                ErrorKind::ValueValidation
            );
            assert_eq!(
                cli(&["--pattern", "spaceship"]).unwrap_err().kind(),
                ErrorKind::ValueValidation
            );
            assert_eq!(cli(&["--bogus"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
            assert_eq!(
                cli(&["--settings", "/nonexistent/life-settings.json"]).unwrap_err().kind(),
                ErrorKind::ValueValidation
            );
        }

        #[test]
        fn test_simulate_blinker() {
            let settings = Settings::default();
            let start = simulate(parse_pattern("blinker").unwrap(), 0, &settings);
            let two = simulate(parse_pattern("blinker").unwrap(), 2, &settings);
            assert_eq!(two.generation, 2);
            assert_eq!(two.sim, start.sim);
            assert_eq!(two.interval_ms, 100);
        }

        #[test]
        fn test_ascii_layout() {
            let out = ascii(&DenseBoard::empty());
            assert_eq!(out.lines().count(), 50);
            assert!(out.lines().all(|l| l.len() == 50));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("SVG Life (native) starting...");
    log::info!("The interactive board is web-only - run with `trunk serve` for the browser version");
    native::run();
}
