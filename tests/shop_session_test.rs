use cookie_shop::{load_catalog, Console, OrderLine, Result, ShopEngine};
use std::collections::VecDeque;
use std::io::Write;
use tempfile::NamedTempFile;

/// Scripted console for end-to-end runs: answers prompts from a fixed list
/// and records everything printed, prompts included, in order.
struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            transcript: String::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, text: &str) -> Result<String> {
        self.transcript.push_str(text);
        match self.inputs.pop_front() {
            Some(line) => Ok(line),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "scripted console ran out of input",
            )
            .into()),
        }
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }
}

fn write_catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SAMPLE_CATALOG: &str = "id,title,description,price,sugar_free,gluten_free,contains_nuts\n\
     1,Animal Cupcake,A vanilla cupcake with an animal face.,$0.99,True,True,True\n\
     2,Basboosa Semolina Cake,A semolina dessert soaked in rose water syrup.,$3.99,False,False,False\n\
     3,Almond Biscotti,Twice-baked and studded with roasted almonds.,$3.25,True,False,True\n";

#[test]
fn test_end_to_end_single_item_order() {
    // Setup: catalog with the Animal Cupcake, no dietary restrictions.
    let file = write_catalog_file(SAMPLE_CATALOG);
    let catalog = load_catalog(file.path()).unwrap();

    let console = ScriptedConsole::new(&["no", "no", "no", "1", "5", "finished"]);
    let mut engine = ShopEngine::new(catalog, console);

    let order = engine.run().unwrap();

    // Verify the order and the receipt lines.
    assert_eq!(
        order,
        vec![OrderLine {
            product_id: 1,
            quantity: 5
        }]
    );

    let transcript = engine.into_console().transcript;
    assert!(transcript.contains("Welcome to the Cookie Shop!"));
    assert!(transcript.contains("We feed each according to their need."));
    assert!(transcript.contains("Here are the cookies we have in the shop for you:"));
    assert!(transcript.contains("#1 - Animal Cupcake"));
    assert!(transcript.contains("Price: $0.99"));
    assert!(transcript.contains("Your subtotal for 5 Animal Cupcake is $4.95\n"));
    assert!(transcript.contains("-5 Animal Cupcake\n"));
    assert!(transcript.contains("Your total is $4.95.\n"));
    assert!(transcript.contains("Please pay with Bitcoin before picking-up.\n"));
    assert!(transcript.contains("-The Cookie Shop Robot.\n"));
}

#[test]
fn test_end_to_end_discards_invalid_id_input() {
    // "abc" is discarded by the re-prompt, not treated as an id.
    let file = write_catalog_file(SAMPLE_CATALOG);
    let catalog = load_catalog(file.path()).unwrap();

    let console = ScriptedConsole::new(&["no", "no", "no", "abc", "1", "3", "exit"]);
    let mut engine = ShopEngine::new(catalog, console);

    let order = engine.run().unwrap();

    assert_eq!(
        order,
        vec![OrderLine {
            product_id: 1,
            quantity: 3
        }]
    );
}

#[test]
fn test_end_to_end_multi_line_order_totals() {
    let file = write_catalog_file(SAMPLE_CATALOG);
    let catalog = load_catalog(file.path()).unwrap();

    let console = ScriptedConsole::new(&["no", "no", "no", "1", "8", "2", "1", "done"]);
    let mut engine = ShopEngine::new(catalog, console);

    let order = engine.run().unwrap();

    assert_eq!(order.len(), 2);
    let transcript = engine.into_console().transcript;
    assert!(transcript.contains("-8 Animal Cupcake\n"));
    assert!(transcript.contains("-1 Basboosa Semolina Cake\n"));
    // 8 * $0.99 + 1 * $3.99
    assert!(transcript.contains("Your total is $11.91.\n"));
}

#[test]
fn test_end_to_end_filters_catalog_by_preferences() {
    let file = write_catalog_file(SAMPLE_CATALOG);
    let catalog = load_catalog(file.path()).unwrap();

    // Allergic to nuts: the biscotti and the cupcake (contains nuts) are
    // suppressed, the semolina cake is shown.
    let console = ScriptedConsole::new(&["yes", "no", "no", "quit"]);
    let mut engine = ShopEngine::new(catalog, console);

    let order = engine.run().unwrap();

    assert!(order.is_empty());
    let transcript = engine.into_console().transcript;
    assert!(transcript.contains("#2 - Basboosa Semolina Cake"));
    assert!(!transcript.contains("#1 - Animal Cupcake"));
    assert!(!transcript.contains("#3 - Almond Biscotti"));
}

#[test]
fn test_end_to_end_reprompts_on_unrecognized_dietary_answer() {
    let file = write_catalog_file(SAMPLE_CATALOG);
    let catalog = load_catalog(file.path()).unwrap();

    // "Yes" (capitalized) is not accepted; the question is asked again.
    let console = ScriptedConsole::new(&["Yes", "yes", "no", "no", "exit"]);
    let mut engine = ShopEngine::new(catalog, console);

    engine.run().unwrap();

    let transcript = engine.into_console().transcript;
    assert_eq!(transcript.matches("Are you allergic to nuts? ").count(), 2);
    assert_eq!(transcript.matches("Are you allergic to gluten? ").count(), 1);
}

#[test]
fn test_end_to_end_exact_transcript() {
    // Golden transcript for a minimal session. Prompts appear inline because
    // the console echoes no input.
    let file = write_catalog_file(
        "id,title,description,price,sugar_free,gluten_free,contains_nuts\n\
         1,Animal Cupcake,A vanilla cupcake with an animal face.,$0.99,True,True,False\n",
    );
    let catalog = load_catalog(file.path()).unwrap();

    let console = ScriptedConsole::new(&["no", "no", "no", "1", "5", "finished"]);
    let mut engine = ShopEngine::new(catalog, console);
    engine.run().unwrap();

    // Prompt text ends with a space and no newline; the blank line opening
    // the receipt is what finally terminates the last prompt's line.
    let expected = concat!(
        "Welcome to the Cookie Shop!\n",
        "We feed each according to their need.\n",
        "We'd hate to trigger an allergic reaction in your body. So please answer the following questions:\n",
        "\n",
        "Are you allergic to nuts? ",
        "Are you allergic to gluten? ",
        "Do you suffer from diabetes? ",
        "Here are the cookies we have in the shop for you:\n",
        "\n",
        "#1 - Animal Cupcake\n",
        "A vanilla cupcake with an animal face.\n",
        "Price: $0.99\n",
        "\n",
        "Please enter the number of any cookie you would like to purchase: ",
        "My favorite! How many Animal Cupcake would you like? ",
        "Your subtotal for 5 Animal Cupcake is $4.95\n",
        "Please enter the number of any cookie you would like to purchase: ",
        "\n",
        "Thank you for your order. You have ordered:\n",
        "\n",
        "-5 Animal Cupcake\n",
        "\n",
        "Your total is $4.95.\n",
        "Please pay with Bitcoin before picking-up.\n",
        "\n",
        "Thank you!\n",
        "-The Cookie Shop Robot.\n",
        "\n",
    );

    assert_eq!(engine.into_console().transcript, expected);
}
