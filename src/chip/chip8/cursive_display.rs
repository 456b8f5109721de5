use crate::chip::{
    chip8::{
        constants::CHIP8_VIEW_LINES,
        listing::{self, ListingOptions},
        Chip8,
    },
    ChipWithCursiveDisplay,
};

use cursive::{
    event::{Event, EventResult},
    theme::{BaseColor, Color, ColorStyle},
    view::View,
    CbSink, Printer, Vec2,
};

/// Represents the disassembly view: an enlarged bitmap of the selected
/// word above a window of listing lines.
pub struct Display {
    /// Bits of the selected word, most significant first. `None` for an
    /// empty program.
    pixels: Option<[bool; 16]>,

    /// The listing lines currently in view.
    lines: Vec<String>,

    /// Index into `lines` of the selected word.
    selected: usize,
}

impl Display {
    /// Creates a new display for the given word and listing window.
    pub fn new(word: Option<u16>, lines: Vec<String>, selected: usize) -> Self {
        let pixels = word.map(|word| {
            let mut pixels = [false; 16];
            for (i, pixel) in pixels.iter_mut().enumerate() {
                *pixel = (word >> (15 - i)) & 1 == 1;
            }
            pixels
        });
        Display {
            pixels,
            lines,
            selected,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(None, Vec::new(), 0)
    }
}

/// Implements cursive::view::View for Display to enable drawing it
/// as a View out of the box.
impl View for Display {
    fn draw(&self, printer: &Printer) {
        match self.pixels {
            Some(pixels) => printer.with_color(
                ColorStyle::new(Color::Dark(BaseColor::Black), Color::RgbLowRes(0, 0, 0)),
                |printer| {
                    // two rows of eight, each pixel two cells wide
                    for (i, pixel) in pixels.iter().enumerate() {
                        if *pixel {
                            printer.print(((i % 8) * 2, i / 8), "  ");
                        }
                    }
                },
            ),
            None => printer.print((0, 0), "<empty program>"),
        }

        for (y, line) in self.lines.iter().enumerate() {
            if y == self.selected {
                printer.with_color(ColorStyle::highlight(), |printer| {
                    printer.print((0, y + 3), line)
                });
            } else {
                printer.print((0, y + 3), line);
            }
        }
    }

    fn on_event(&mut self, _event: Event) -> EventResult {
        EventResult::Ignored
    }

    fn required_size(&mut self, _: Vec2) -> Vec2 {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Vec2 {
            x: width.max(16),
            y: CHIP8_VIEW_LINES + 3,
        }
    }
}

impl ChipWithCursiveDisplay for Chip8 {
    fn update_ui(&mut self, gfx_sink: &CbSink) {
        fn get_display(chip: &Chip8) -> Display {
            let options = ListingOptions {
                addresses: true,
                art: false,
                hex: true,
            };
            let start = chip.cursor().saturating_sub(CHIP8_VIEW_LINES / 2);
            let lines = chip
                .words()
                .skip(start)
                .take(CHIP8_VIEW_LINES)
                .map(|(address, opcode)| listing::format_line(address, opcode, &options))
                .collect();
            let word = chip.current().map(|(_, opcode)| opcode.word());
            Display::new(word, lines, chip.cursor() - start)
        }

        if !self.draw {
            return;
        }
        let display = get_display(self);
        gfx_sink
            .send(Box::new(move |s: &mut cursive::Cursive| {
                s.pop_layer();
                s.add_layer(display);
            }))
            .expect("Sending updated display failed");
        self.draw = false;
    }
}
