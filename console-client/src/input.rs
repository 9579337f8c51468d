use common::games::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Place { x: usize, y: usize },
    NewGame,
    Help,
    Quit,
}

/// Accepts `x y` (or `x,y`), `n`/`new`, `h`/`help`, `q`/`quit`.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let trimmed = line.trim().to_lowercase();
    match trimmed.as_str() {
        "q" | "quit" | "exit" => return Ok(ConsoleCommand::Quit),
        "n" | "new" => return Ok(ConsoleCommand::NewGame),
        "h" | "help" | "?" => return Ok(ConsoleCommand::Help),
        "" => return Err("Enter a move as `x y`".to_string()),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let [x, y] = parts.as_slice() else {
        return Err(format!("Expected two coordinates, got `{}`", line.trim()));
    };

    let x = parse_coordinate(x)?;
    let y = parse_coordinate(y)?;
    Ok(ConsoleCommand::Place { x, y })
}

fn parse_coordinate(value: &str) -> Result<usize, String> {
    let coordinate: usize = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if coordinate >= BOARD_SIZE {
        return Err(format!(
            "Coordinate {} is out of range 0..{}",
            coordinate,
            BOARD_SIZE - 1
        ));
    }
    Ok(coordinate)
}

pub fn help_text() -> &'static str {
    "Commands: `x y` place a mark (column, row, 0-2), `n` new game, `h` help, `q` quit"
}
