use deck_demo::app;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== SwipeDeck Demo ===");
    println!("Scripted drags on a deck of profiles:");
    println!("  - past a quarter of the screen the card flies off and a hook fires");
    println!("  - anything shorter springs back to rest");
    println!("  - replacing the deck data starts over from the first card");
    println!();

    let summary = app::swipe_deck::run()?;
    println!();
    println!("liked:    {}", summary.liked.join(", "));
    println!("disliked: {}", summary.disliked.join(", "));
    println!();

    let ball = app::ball::run()?;
    println!("ball came to rest at ({:.1}, {:.1})", ball.x, ball.y);

    let height = app::growing_box::run()?;
    println!("box grew to {height:.1}px");
    Ok(())
}
