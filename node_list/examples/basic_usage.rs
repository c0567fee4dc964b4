use node_list::{ListError, NodeList};

fn main() {
    println!("=== Node List Examples ===\n");

    // Example 1: Editing a mutable list
    let _ = example_editing();

    // Example 2: Fixed-size slots
    let _ = example_fixed_slots();

    // Example 3: Read-only snapshot
    let _ = example_read_only();
}

fn example_editing() -> Result<(), ListError> {
    println!("Example 1: Editing a playlist");

    let mut playlist = NodeList::new();
    playlist.add("intro");
    playlist.add("verse");
    playlist.add("outro");
    println!("  Start:        {}", playlist);

    playlist.insert(2, "chorus")?;
    println!("  Insert at 2:  {}", playlist);

    playlist.remove_at(0)?;
    println!("  Remove at 0:  {}", playlist);

    let removed = playlist.remove(&"verse");
    println!("  Remove verse: {} ({})", playlist, removed);

    match playlist.get(10) {
        Ok(track) => println!("  Track 10: {}", track),
        Err(err) => println!("  Track 10: {}", err),
    }
    println!();

    Ok(())
}

fn example_fixed_slots() -> Result<(), ListError> {
    println!("Example 2: Four fixed sensor slots");

    let mut readings = NodeList::<f32>::with_size(4, false);
    readings.set(1, 21.5)?;
    readings.set(3, 19.0)?;

    // Shape is frozen, so this is ignored
    readings.add(30.0);

    println!("  Slots: {} (len {})", readings, readings.len());

    let mut buffer = [0.0f32; 6];
    readings.copy_to(&mut buffer, 2)?;
    println!("  Copied into buffer: {:?}", buffer);
    println!();

    Ok(())
}

fn example_read_only() -> Result<(), ListError> {
    println!("Example 3: Read-only list");

    let mut frozen = NodeList::from_sequence(vec![1, 2, 3], true);
    frozen.add(4);
    frozen.set(0, 9)?;
    println!("  After ignored writes: {}", frozen);

    let mut total = 0;
    frozen.for_each(|v| total += v);
    println!("  Sum: {}", total);

    frozen.clear();
    frozen.add(10);
    println!(
        "  After clear: {} (read-only: {})",
        frozen,
        frozen.is_read_only()
    );

    Ok(())
}
