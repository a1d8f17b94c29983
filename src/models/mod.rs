mod amount;
mod balance_sheet;
mod line_item;
mod output;

pub use amount::Amount;
pub use balance_sheet::{BalanceSheetModel, BalanceSheetSection, DEFAULT_CURRENCY};
pub use line_item::LineItem;
pub use output::{Calculated, OutputModel};
