// active-chat-core/active-chat-utils
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
