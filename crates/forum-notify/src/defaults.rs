//! Built-in English texts.
//!
//! Used when no localized resource overrides them.

/// Page holding shared texts such as mail subjects.
pub const COMMON_PAGE: &str = "COMMON";

/// Page holding mail body templates.
pub const TEMPLATES_PAGE: &str = "TEMPLATES";

/// Template key of the new-registration notice.
pub const USER_REGISTER_TEMPLATE: &str = "NOTIFICATION_ON_USER_REGISTER";

/// Template key of the spam-bot registration notice.
pub const BOT_USER_REGISTER_TEMPLATE: &str = "NOTIFICATION_ON_BOT_USER_REGISTER";

/// Suffix appended to a template key to form its subject tag.
pub const SUBJECT_SUFFIX: &str = "_EMAIL_SUBJECT";

/// Default `(page, tag, text)` triples.
pub const TEXTS: &[(&str, &str, &str)] = &[
    (
        COMMON_PAGE,
        "NOTIFICATION_ON_USER_REGISTER_EMAIL_SUBJECT",
        "New user registered on {0}",
    ),
    (
        COMMON_PAGE,
        "NOTIFICATION_ON_BOT_USER_REGISTER_EMAIL_SUBJECT",
        "Possible spam bot registered on {0}",
    ),
    (
        TEMPLATES_PAGE,
        USER_REGISTER_TEMPLATE,
        "Hello,

A new user has registered on {forumname}.

User name: {user}
Email: {email}

To review or edit this user, visit:
{adminlink}

Regards,
{forumname}",
    ),
    (
        TEMPLATES_PAGE,
        BOT_USER_REGISTER_TEMPLATE,
        "Hello,

A registration on {forumname} was flagged as a possible spam bot.

User name: {user}
Email: {email}

The account needs a moderator's review. To approve or delete it, visit:
{adminlink}

Regards,
{forumname}",
    ),
];
