use carmine_resp::Command;
use carmine_resp::Cursor;
use carmine_resp::parse;
use rstest::rstest;

#[rstest]
#[case(Command::new("PING"), b"*1\r\n$4\r\nPING\r\n".as_slice())]
#[case(
    Command::new("SET").arg("foo").arg("bar"),
    b"*3\r\n$3\r\nSET\r\n$3\r\nfoo\r\n$3\r\nbar\r\n".as_slice()
)]
#[case(
    Command::new("SUBSCRIBE").arg("news"),
    b"*2\r\n$9\r\nSUBSCRIBE\r\n$4\r\nnews\r\n".as_slice()
)]
fn test_wire_format(#[case] cmd: Command, #[case] expected: &[u8]) {
    assert_eq!(&cmd.encode()[..], expected);
}

#[test]
fn test_args_iterator() {
    let cmd = Command::new("MSET").args(["k1", "v1", "k2", "v2"]);
    assert_eq!(cmd, Command::new("MSET").arg("k1").arg("v1").arg("k2").arg("v2"));
}

#[test]
fn test_binary_argument() {
    let cmd = Command::new("SET").arg("k").arg(&b"\x00\xff"[..]);
    assert_eq!(&cmd.encode()[..], b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$2\r\n\x00\xff\r\n");
}

#[test]
fn test_request_frame_is_valid_resp() {
    // A request is itself an array of bulk strings, so the decoder must be
    // able to read back exactly what the encoder produced.
    let cmd = Command::new("LPUSH").arg("list").arg("a value? no quoting");
    let mut cursor = Cursor::new(cmd.encode());
    let reply = parse(&mut cursor).unwrap();
    let items = reply.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_str(), Some("LPUSH"));
    assert_eq!(items[1].as_str(), Some("list"));
    assert_eq!(items[2].as_str(), Some("a value? no quoting"));
    assert!(cursor.is_exhausted());
}

#[test]
fn test_sentence_round_trip() {
    let cmd = Command::from_sentence("get  foo").unwrap();
    assert_eq!(&cmd.encode()[..], b"*2\r\n$3\r\nget\r\n$3\r\nfoo\r\n");
}
