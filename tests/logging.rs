use checkers::{movegen::legal_moves, GameState, MoveSelector, Weights};
use log::{LevelFilter, Log, Metadata, Record};
use std::{mem, sync::Mutex};

struct Recorder {
    messages: Mutex<Vec<String>>,
}

impl Log for Recorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.messages.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    messages: Mutex::new(Vec::new()),
};

fn take_messages() -> Vec<String> {
    mem::take(&mut *RECORDER.messages.lock().unwrap())
}

// Kept as the only test in this binary: the logger is global.
#[test]
fn test_only_played_moves_are_logged() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut state = GameState::new();
    let mut selector = MoveSelector::with_seed(Weights::default(), 3);
    for _ in 0..4 {
        _ = selector.score_moves(&state);
        let mov = legal_moves(&state)[0];
        let mut copy = state;
        assert!(copy.make_move(mov.start.index(), mov.end.index()));
        assert!(take_messages().is_empty());

        assert!(selector.choose_and_apply(&mut state));
        let played: Vec<String> = take_messages()
            .into_iter()
            .filter(|message| message.starts_with("played"))
            .collect();
        assert_eq!(played.len(), 1, "{played:?}");
    }
}
