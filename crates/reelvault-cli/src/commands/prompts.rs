use color_eyre::Result;
use dialoguer::Input;

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for a rating threshold (0 disables the filter), re-asking until the
/// input parses.
pub fn prompt_threshold(prompt: &str, default: f64) -> Result<f64> {
    loop {
        let input_str = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))?;

        match input_str.trim().parse::<f64>() {
            Ok(value) if (0.0..=5.0).contains(&value) => return Ok(value),
            _ => eprintln!("Invalid input. Please enter a number between 0 and 5."),
        }
    }
}

/// Prompt for a rating value (1-5), re-asking until the input parses.
pub fn prompt_rating(prompt: &str) -> Result<i32> {
    loop {
        let input_str = Input::<String>::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))?;

        match input_str.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => eprintln!("Invalid input. Please enter a whole number."),
        }
    }
}
