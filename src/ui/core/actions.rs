use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    GoToToday,
    /// Raw selector input, validated before anything changes
    ApplySelection {
        year: String,
        month: String,
    },

    // Memo operations
    OpenMemo(NaiveDate),
    SaveMemo {
        date: NaiveDate,
        text: String,
    },

    // UI operations
    ShowDialog(DialogType),

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    MemoEdit { date: NaiveDate, text: String },
    Error(String),
    Help,
    Logs,
}
