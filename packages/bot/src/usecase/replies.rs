//! Reply texts sent back to the channel.

pub const HELP: &str = "可用命令：\n\
- help: 显示此帮助信息\n\
- cat [n]: 发送 \"喵\" 字符 n 次，n 在 1 到 10 之间\n\
- owo: 掷骰子，得到一个 1 到 6 之间的数字\n\
- game: 开始一个新的猜数字游戏\n\
- guess [number]: 在猜数字游戏中进行猜测\n\
- nick [newNickname]: 更改昵称为 [newNickname]（仅限管理员）\n\
- color [colorCode]: 更改颜色为 [colorCode]（仅限管理员，或使用 \"random\" 生成随机颜色）\n\
- addadmin [trip]: 添加管理员（仅限管理员）\n\
- removeadmin [trip]: 移除管理员（仅限管理员）\n\
- listadmins: 列出所有管理员（仅限管理员）\n\
- chat [text]: 发送自定义聊天消息（仅限管理员）\n\
- time [timezone]: 查询当前时间，默认时区为 Asia/Shanghai";

pub const CAT_GLYPH: &str = "喵";
pub const ADMIN_ONLY: &str = "只有管理员才能使用此命令。";
pub const GAME_STARTED: &str = "猜数字游戏已开始！请猜一个1到100之间的数字。";
pub const GUESS_RANGE: &str = "请输入一个1到100之间的数字进行猜测。";
pub const GUESS_TOO_SMALL: &str = "太小了，请再试一次。";
pub const GUESS_TOO_LARGE: &str = "太大了，请再试一次。";
pub const INVALID_COLOR: &str = "无效的颜色代码。请使用16进制格式，例如 #RRGGBB。";
pub const ADD_ADMIN_REFUSED: &str = "无效的 trip 码或该用户已是管理员。";
pub const ADMIN_NOT_FOUND: &str = "管理员不存在。";
pub const TIME_FALLBACK: &str = "希腊奶~";

pub fn dice(value: u8) -> String {
    format!("骰子结果: {value}")
}

pub fn guess_correct(target: u8) -> String {
    format!("恭喜你猜对了！数字是{target}。")
}

pub fn nick_changed(nickname: &str) -> String {
    format!("昵称已更改为 {nickname}")
}

pub fn color_changed(color: &str) -> String {
    format!("颜色已更改为 {color}")
}

pub fn admin_added(trip: &str) -> String {
    format!("管理员 {trip} 已添加。")
}

pub fn admin_removed(trip: &str) -> String {
    format!("管理员 {trip} 已移除。")
}

pub fn super_admin_protected(trip: &str) -> String {
    format!("{trip} 是超级管理员，无法删除。")
}

pub fn admin_list(trips: &[String]) -> String {
    format!("当前管理员：\n{}", trips.join("\n"))
}

pub fn current_time(timezone: &str, formatted: &str) -> String {
    format!("当前时间 ({timezone})：{formatted}")
}
