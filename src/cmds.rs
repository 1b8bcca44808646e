#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    NextMonth,
    PrevMonth,
    NextDay,
    PrevDay,
    NextWeek,
    PrevWeek,
    Today,
    Exit,
}
