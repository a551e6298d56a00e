//! Polski (pl-PL)

use super::keys::{ModalTexts, SubmitTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    submit: SubmitTexts {
        busy_label: "Wysyłanie…",
        default_label: "Wyślij zapytanie",
        sending: "Wysyłam wiadomość…",
        thank_you: "Dziękujemy! Skontaktujemy się wkrótce.",
        server_error: "Nie udało się wysłać (błąd serwera).",
        timed_out: "Przekroczono czas oczekiwania. Spróbuj ponownie.",
        generic_retry: "Coś poszło nie tak. Spróbuj ponownie.",
    },
    modal: ModalTexts {
        default_alt: "Podgląd",
    },
};
