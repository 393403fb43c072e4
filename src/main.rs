use crossterm::event::{self, Event};
use flappy::input::{map_key, FlappyInput};
use flappy::ui::terminal::{self, FlappyTerminal};
use flappy::utils::logging;
use flappy::{
    FlappyEvent, GameConfig, GameState, HighScoreRecord, HighScoreStore, FRAME_INTERVAL_MS,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info};

fn main() -> io::Result<()> {
    logging::init()?;

    let store = HighScoreStore::new()?;
    let record = store.load_or_init()?;
    info!(high_score = record.high_score, "starting flappy");

    let mut game = GameState::new(GameConfig::default(), record.high_score);

    let mut terminal = terminal::enter()?;
    let result = run(&mut terminal, &mut game, &store);
    terminal::leave(&mut terminal)?;

    info!("quit");
    result
}

/// Drive the simulation at a fixed frame rate until the player quits.
fn run(
    terminal: &mut FlappyTerminal,
    game: &mut GameState,
    store: &HighScoreStore,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();
    let mut jump_requested = false;

    loop {
        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    FlappyInput::Jump => jump_requested = true,
                    FlappyInput::Quit => return Ok(()),
                    FlappyInput::Other => {}
                }
            }
        }

        if last_frame.elapsed() < frame_interval {
            continue;
        }
        last_frame = Instant::now();

        game.handle_input(jump_requested);
        jump_requested = false;

        for event in game.step(&mut rng) {
            if let FlappyEvent::Died {
                new_high_score: Some(high_score),
                ..
            } = event
            {
                if let Err(e) = store.save(&HighScoreRecord { high_score }) {
                    error!(error = %e, "failed to save high score");
                }
            }
        }

        let snapshot = game.snapshot();
        terminal.draw(|frame| flappy::ui::draw(frame, &snapshot))?;
    }
}
