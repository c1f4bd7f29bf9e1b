//! Command-line entry point: replays a short doodle and saves it as PNG.

#[cfg(feature = "native")]
fn main() {
    use kurbo::Point;
    use mindmate_app::{AppConfig, DirectorySink, DoodleScreen};
    use mindmate_core::input::{MouseButton, PointerEvent};
    use mindmate_core::notify::ToastQueue;
    use mindmate_core::screen::{HistoryNavigator, Screen};

    env_logger::init();

    let config = AppConfig::from_args(std::env::args().skip(1));
    log::info!("Starting {}", config.title);

    let mut navigator = HistoryNavigator::new(Screen::DoodleSpace);
    let mut toasts = ToastQueue::new();
    let mut screen = DoodleScreen::new(config.surface_config());

    // A wave across the canvas, then a second stroke in another color.
    let waves: [(&str, u8, [Point; 5]); 2] = [
        (
            "Sky Glow",
            6,
            [
                Point::new(40.0, 200.0),
                Point::new(100.0, 150.0),
                Point::new(160.0, 200.0),
                Point::new(220.0, 250.0),
                Point::new(280.0, 200.0),
            ],
        ),
        (
            "Bubblegum Pink",
            3,
            [
                Point::new(40.0, 260.0),
                Point::new(100.0, 210.0),
                Point::new(160.0, 260.0),
                Point::new(220.0, 310.0),
                Point::new(280.0, 260.0),
            ],
        ),
    ];

    for (color, size, points) in waves {
        if let Err(e) = screen
            .select_color(color)
            .and_then(|()| screen.set_brush_size(size))
        {
            log::error!("{}", e);
            std::process::exit(1);
        }

        let [first, rest @ ..] = points;
        screen.handle_pointer_event(PointerEvent::Down {
            position: first,
            button: MouseButton::Left,
        });
        for position in rest {
            screen.handle_pointer_event(PointerEvent::Move { position });
        }
        screen.handle_pointer_event(PointerEvent::Leave);
    }

    let mut sink = DirectorySink::new(config.output_dir.clone());
    match screen.save(&mut sink, &mut toasts) {
        Ok(location) => println!("{}", location),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }

    screen.back(&mut navigator);
    log::info!("Back on {}", navigator.current().title());
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
