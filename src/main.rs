use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use liftoff::build_info;
use liftoff::constants::POLL_INTERVAL_MS;
use liftoff::game::{process_input, tick_flight, FlightEvent, FlightGame, FlightInput, GameConfig, Phase};
use liftoff::ui::effects::{self, ConfettiParticle};
use liftoff::ui::scene;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "liftoff {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Liftoff - Terminal Rocket Mini-Game\n");
                println!("Usage: liftoff [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Scroll (or press Space/Up) to keep the rocket flying.");
                println!("Stop feeding it input and it falls. [Q] quits.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'liftoff --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal);

    // Cleanup terminal on every exit path, including errors from the loop
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run_game(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut game = FlightGame::new(GameConfig::default());
    let mut rng = rand::thread_rng();
    let mut confetti: Vec<ConfettiParticle> = Vec::new();
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.size();
            scene::render_scene(frame, area, &game, &mut rng);
            effects::render_confetti(frame, area, &confetti);
        })?;

        // Poll for input (non-blocking past the timeout)
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        break;
                    }
                    KeyCode::Char(' ') | KeyCode::Up => {
                        if game.phase == Phase::GameOver {
                            process_input(&mut game, FlightInput::PlayAgain);
                            confetti.clear();
                        } else {
                            process_input(&mut game, FlightInput::Boost);
                        }
                    }
                    KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                        if game.phase == Phase::GameOver {
                            process_input(&mut game, FlightInput::PlayAgain);
                            confetti.clear();
                        } else {
                            process_input(&mut game, FlightInput::Other);
                        }
                    }
                    _ => {
                        process_input(&mut game, FlightInput::Other);
                    }
                },
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                        process_input(&mut game, FlightInput::Boost);
                    }
                    MouseEventKind::Down(MouseButton::Left) if game.config.boost_button => {
                        let button = scene::boost_button_rect(terminal.size()?);
                        let inside = mouse_event.column >= button.x
                            && mouse_event.column < button.x + button.width
                            && mouse_event.row >= button.y
                            && mouse_event.row < button.y + button.height;
                        if inside {
                            process_input(&mut game, FlightInput::Boost);
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // Advance the flight simulation from elapsed wall time
        let dt = last_tick.elapsed();
        last_tick = Instant::now();

        if let Some(FlightEvent::GameOver { new_high_score, .. }) =
            tick_flight(&mut game, dt.as_millis() as u64)
        {
            if new_high_score {
                let area = terminal.size()?;
                confetti = effects::spawn_confetti(&mut rng, area.width, area.height);
            }
        }

        // Age celebration particles
        effects::update_confetti(&mut confetti, dt.as_secs_f64());
    }

    Ok(())
}
