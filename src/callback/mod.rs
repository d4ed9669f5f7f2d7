mod callback_data;

pub use callback_data::CallbackData;
