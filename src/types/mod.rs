pub(crate) mod de;

mod session;
pub use self::session::{Feed, LoggedInStatus, Login, RealtimeAccess, SystemStatus};

mod account;
pub use self::account::{Account, AccountSummary, Ledger, Position, PositionInstrument};

mod order;
pub use self::order::{
    ActivationCondition, InstrumentId, Order, OrderReply, Price, SecurityTrade, Side, Trade,
    Validity,
};

mod instrument;
pub use self::instrument::{ChartPoint, Derivative, Instrument, InstrumentRef};

mod market;
pub use self::market::{Index, List, Market, OrderTypeInfo, Ticksize, TradingDay};

mod news;
pub use self::news::{NewsItem, NewsPreview, NewsSource};
