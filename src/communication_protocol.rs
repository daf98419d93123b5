use crate::board::{to_string, Color};
use crate::game::{Game, GameStatus};
use crate::square::Square;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MsgType {
    Move, Board, Status
}

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JsonMsg {
    pub msg_type: MsgType,
    #[serde(default)]
    pub make_move: Option<(Square, Square)>
}

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MsgTypeServer {
    Board,
    IllegalMove,
    WhiteWon,
    BlackWon,
    Tie,
    Error,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct JsonMsgServer {
    pub msg_type: MsgTypeServer,
    pub board: Option<String>,
    pub turn: Color,
    pub status: GameStatus,
    pub reason: Option<String>,
}

impl JsonMsgServer {
    fn new(msg_type: MsgTypeServer, game: &Game) -> Self {
        JsonMsgServer { msg_type, board: Some(to_string(game.board())), turn: game.turn(), status: game.status(), reason: None }
    }

    pub fn board(game: &Game) -> Self {
        match game.status() {
            GameStatus::Unfinished => JsonMsgServer::new(MsgTypeServer::Board, game),
            GameStatus::WhiteWon => JsonMsgServer::new(MsgTypeServer::WhiteWon, game),
            GameStatus::BlackWon => JsonMsgServer::new(MsgTypeServer::BlackWon, game),
            GameStatus::Tie => JsonMsgServer::new(MsgTypeServer::Tie, game),
        }
    }

    pub fn error(game: &Game, reason: String) -> Self {
        JsonMsgServer { msg_type: MsgTypeServer::Error, board: None, turn: game.turn(), status: game.status(), reason: Some(reason) }
    }
}

/// Applies one client message to `game` and builds the reply.
pub fn handle_msg(game: &mut Game, msg: JsonMsg) -> JsonMsgServer {
    match msg.msg_type {
        MsgType::Move => {
            let (move_from, move_to) = match msg.make_move {
                None => return JsonMsgServer::error(game, "Move must be provided".to_string()),
                Some(m) => m,
            };
            match game.play(move_from, move_to) {
                Ok(()) => JsonMsgServer::board(game),
                Err(reason) => {
                    let mut response = JsonMsgServer::new(MsgTypeServer::IllegalMove, game);
                    response.reason = Some(reason.to_string());
                    response
                }
            }
        }
        MsgType::Board => JsonMsgServer::board(game),
        MsgType::Status => JsonMsgServer { board: None, ..JsonMsgServer::board(game) },
    }
}

/// Decodes one line of input and applies it; undecodable lines yield an error reply.
pub fn handle_line(game: &mut Game, line: &str) -> JsonMsgServer {
    match serde_json::from_str::<JsonMsg>(line) {
        Ok(msg) => handle_msg(game, msg),
        Err(e) => {
            log::error!("Cannot decode message {:?}: {}", line, e);
            JsonMsgServer::error(game, e.to_string())
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::Color::{Black, White};
    use crate::communication_protocol::{handle_line, handle_msg, JsonMsg, JsonMsgServer, MsgType, MsgTypeServer};
    use crate::game::{Game, GameStatus};

    #[test]
    fn test_decode_move() {
        let msg: JsonMsg = serde_json::from_str(r#"{"msg_type":"Move","make_move":["a2","a3"]}"#).unwrap();
        assert_eq!(msg.msg_type, MsgType::Move);
        let (from, to) = msg.make_move.unwrap();
        assert_eq!((from.to_string(), to.to_string()), ("a2".to_string(), "a3".to_string()));

        let msg: JsonMsg = serde_json::from_str(r#"{"msg_type":"Status"}"#).unwrap();
        assert_eq!(msg, JsonMsg { msg_type: MsgType::Status, make_move: None });
    }

    #[test]
    fn test_move_reply() {
        let mut game = Game::new();
        let reply = handle_line(&mut game, r#"{"msg_type":"Move","make_move":["a2","a3"]}"#);
        assert_eq!(reply.msg_type, MsgTypeServer::Board);
        assert_eq!(reply.turn, Black);
        assert_eq!(reply.status, GameStatus::Unfinished);
        assert!(reply.board.unwrap().ends_with("R.......\n.BN..nbr\nKBN..nbk"));
    }

    #[test]
    fn test_illegal_move_reply() {
        let mut game = Game::new();
        let reply = handle_line(&mut game, r#"{"msg_type":"Move","make_move":["h2","h3"]}"#);
        assert_eq!(reply.msg_type, MsgTypeServer::IllegalMove);
        assert_eq!(reply.turn, White);
        assert_eq!(reply.reason.as_deref(), Some("no piece of the side to move on the origin square"));
    }

    #[test]
    fn test_move_commits_once() {
        let mut game = Game::new();
        let reply = handle_msg(&mut game, JsonMsg { msg_type: MsgType::Move, make_move: Some(("a2".parse().unwrap(), "a3".parse().unwrap())) });
        assert_eq!(reply.msg_type, MsgTypeServer::Board);
        let reply = handle_msg(&mut game, JsonMsg { msg_type: MsgType::Move, make_move: Some(("h2".parse().unwrap(), "h3".parse().unwrap())) });
        assert_eq!(reply.msg_type, MsgTypeServer::Board);
        assert_eq!(game.turn(), White);
        assert_eq!(reply.turn, White);
    }

    #[test]
    fn test_bad_input_reply() {
        let mut game = Game::new();
        let reply = handle_line(&mut game, r#"{"msg_type":"Move","make_move":["a2","a9"]}"#);
        assert_eq!(reply.msg_type, MsgTypeServer::Error);
        assert!(reply.reason.unwrap().contains("invalid square"));

        let reply = handle_line(&mut game, "not json");
        assert_eq!(reply.msg_type, MsgTypeServer::Error);

        let reply = handle_msg(&mut game, JsonMsg { msg_type: MsgType::Move, make_move: None });
        assert_eq!(reply.msg_type, MsgTypeServer::Error);
        assert_eq!(game.turn(), White);
    }

    #[test]
    fn test_status_reply() {
        let mut game = Game::new();
        let reply = handle_msg(&mut game, JsonMsg { msg_type: MsgType::Status, make_move: None });
        assert_eq!(reply.msg_type, MsgTypeServer::Board);
        assert_eq!(reply.board, None);

        let json = serde_json::to_string(&JsonMsgServer::board(&game)).unwrap();
        assert!(json.contains(r#""msg_type":"Board""#));
        assert!(json.contains(r#""status":"Unfinished""#));
        assert!(json.contains(r#""turn":"White""#));
    }
}
