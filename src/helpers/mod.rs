mod input;
mod load_dotenv;
mod settings;

pub use input::{finish_args, read_input, remaining_paths};
pub use load_dotenv::load_dotenv;
pub use settings::pretty_by_default;
