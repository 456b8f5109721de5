use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use cursive::CbSink;
use std::env;
use std::time::Duration;

use chip_8_disassembler::chip::{
    chip8::cursive_display::Display, chip8::Chip8, Chip, ChipWithCursiveDisplay, LoadProgramError,
};

/// Error type for errors that occur during parsing the command line arguments
/// and loading the program based on the arguments.
enum Error {
    InvalidUsage(String),
    InvalidProgram(LoadProgramError),
}

/// Represents an event to be processed by the event loop.
#[derive(Clone, Copy)]
enum Event {
    /// Moves the cursor one instruction forward.
    Next,

    /// Moves the cursor one instruction back.
    Previous,

    /// Stops or resumes advancing the cursor on every tick.
    TogglePause,

    /// Decreases the time between two ticks.
    SpeedUp,

    /// Increases the time between two ticks.
    SlowDown,

    /// Shut down.
    Quit,
}

/// Represents the channels available to the event loop.
#[derive(Clone)]
struct EventLoopChannels {
    /// The channel to send the UI refresh messages to.
    gfx_sender: CbSink,

    /// The channel on which the Events are received.
    event_receiver: Receiver<Event>,

    /// A channel to report that the thread has completed
    /// shutdown.
    shutdown_sender: Sender<()>,
}

/// The event loop. Waits for an event for at most one tick. On an event it
/// is processed, on timeout the cursor advances unless paused. Afterwards
/// the UI is updated and the loop starts over.
fn event_loop<T>(mut chip: T, io_channels: EventLoopChannels)
where
    T: Chip + ChipWithCursiveDisplay,
{
    let mut tick = 250;
    let mut paused = false;
    chip.update_ui(&io_channels.gfx_sender);
    loop {
        match io_channels
            .event_receiver
            .recv_timeout(Duration::from_millis(tick))
        {
            Ok(Event::Next) => chip.cycle(),
            Ok(Event::Previous) => chip.rewind(),
            Ok(Event::TogglePause) => paused = !paused,
            Ok(Event::SpeedUp) => {
                if tick > 50 {
                    tick -= 50;
                }
            }
            Ok(Event::SlowDown) => {
                tick += 50;
            }
            Ok(Event::Quit) => {
                io_channels
                    .shutdown_sender
                    .send(())
                    .expect("Failed to orderly shutdown.");
                return;
            }
            Err(RecvTimeoutError::Timeout) => {
                if !paused {
                    chip.cycle();
                }
            }
            Err(RecvTimeoutError::Disconnected) => return,
        };

        chip.update_ui(&io_channels.gfx_sender);
    }
}

/// Loads a program based on the given arguments. Interprets the first
/// argument as path to the program to load and attempts to load the
/// program from there.
fn load_program_from_args(chip8: &mut Chip8) -> Result<usize, Error> {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => Err(Error::InvalidUsage(
            "Expecting path to the program to disassemble as command line argument.".to_string(),
        )),
        _ => chip8.load_program(&args[1]).map_err(Error::InvalidProgram),
    }
}

/// Constructs the UI and spawns the event loop and the UI thread.
fn main() {
    let mut chip8 = Chip8::new();

    if let Err(e) = load_program_from_args(&mut chip8) {
        println!("{}", e);
        return;
    }

    let mut siv = cursive::default();

    let cb_sink = siv.cb_sink().clone();
    let (event_sender, event_receiver) = bounded::<Event>(10);
    let (shutdown_sender, shutdown_receiver) = bounded::<()>(1);

    std::thread::spawn(move || {
        event_loop(
            chip8,
            EventLoopChannels {
                gfx_sender: cb_sink,
                event_receiver,
                shutdown_sender,
            },
        );
    });

    let sender = event_sender.clone();
    siv.add_global_callback(cursive::event::Key::Esc, move |s| {
        if sender.send(Event::Quit).is_ok() {
            shutdown_receiver.recv().expect("Orderly shutdown failed");
        }
        s.quit();
    });

    for (key, event) in &[
        ('n', Event::Next),
        ('p', Event::Previous),
        (' ', Event::TogglePause),
    ] {
        let sender = event_sender.clone();
        let event = *event;
        siv.add_global_callback(*key, move |_s| {
            let _ = sender.send(event);
        });
    }

    let sender = event_sender.clone();
    siv.add_global_callback(cursive::event::Key::Up, move |_s| {
        let _ = sender.send(Event::SpeedUp);
    });

    let sender = event_sender;
    siv.add_global_callback(cursive::event::Key::Down, move |_s| {
        let _ = sender.send(Event::SlowDown);
    });

    siv.add_layer(Display::default());

    siv.run();
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidUsage(message) => write!(f, "Usage: {}", message),
            Error::InvalidProgram(error) => write!(f, "{}", error),
        }
    }
}
