pub const WHATSAPP_USER_SERVER: &str = "s.whatsapp.net";

/// Phone number as used in a WhatsApp id: the first `+` removed.
pub fn whatsapp_id(number: &str) -> String {
    number.replacen('+', "", 1)
}

/// User JID for a phone number, e.g. `263788521064@s.whatsapp.net`.
pub fn user_jid(number: &str) -> String {
    format!("{}@{WHATSAPP_USER_SERVER}", whatsapp_id(number))
}

/// vCard 3.0 with a single mobile voice number.
pub fn vcard(name: &str, number: &str) -> String {
    format!(
        "BEGIN:VCARD\nVERSION:3.0\nFN:{name}\nTEL;type=CELL;type=VOICE;waid={}:{number}\nEND:VCARD",
        whatsapp_id(number)
    )
}
