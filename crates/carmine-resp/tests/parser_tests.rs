use bytes::Bytes;
use carmine_resp::Cursor;
use carmine_resp::ParseError;
use carmine_resp::Reply;
use carmine_resp::ReplyData;
use carmine_resp::parse;
use carmine_resp::parse_all;
use rstest::rstest;

fn parse_one(input: &'static [u8]) -> Result<Reply, ParseError> {
    parse(&mut Cursor::new(input))
}

#[rstest]
#[case(b":0\r\n", 0)]
#[case(b":1000\r\n", 1000)]
#[case(b":-42\r\n", -42)]
#[case(b":9223372036854775807\r\n", i64::MAX)]
fn test_integers(#[case] input: &'static [u8], #[case] expected: i64) {
    let reply = parse_one(input).unwrap();
    assert_eq!(reply.data, ReplyData::Integer(expected));
    assert_eq!(&reply.raw[..], input);
}

#[test]
fn test_simple_string() {
    let reply = parse_one(b"+OK\r\n").unwrap();
    assert_eq!(reply.data, ReplyData::SimpleString(Bytes::from_static(b"OK")));
}

#[test]
fn test_error_text_is_opaque() {
    // The "ERR" token stays in the payload; nothing is stripped.
    let reply = parse_one(b"-ERR unknown command 'hello'\r\n").unwrap();
    assert_eq!(
        reply.data,
        ReplyData::Error(Bytes::from_static(b"ERR unknown command 'hello'"))
    );
    assert!(reply.is_error());
}

#[rstest]
#[case(b"$6\r\nfoobar\r\n", Some(&b"foobar"[..]))]
#[case(b"$0\r\n\r\n", Some(&b""[..]))]
#[case(b"$-1\r\n", None)]
fn test_bulk_strings(#[case] input: &'static [u8], #[case] expected: Option<&'static [u8]>) {
    let reply = parse_one(input).unwrap();
    assert_eq!(
        reply.data,
        ReplyData::BulkString(expected.map(Bytes::from_static))
    );
    assert_eq!(&reply.raw[..], input);
}

#[test]
fn test_bulk_string_payload_is_binary_safe() {
    // Payload bytes may contain CR and LF; only the declared length counts.
    let reply = parse_one(b"$4\r\na\r\nb\r\n").unwrap();
    assert_eq!(
        reply.data,
        ReplyData::BulkString(Some(Bytes::from_static(b"a\r\nb")))
    );
}

#[test]
fn test_empty_array() {
    let reply = parse_one(b"*0\r\n").unwrap();
    assert_eq!(reply.data, ReplyData::Array(Vec::new()));
}

#[test]
fn test_negative_array_count_is_empty() {
    let reply = parse_one(b"*-1\r\n").unwrap();
    assert_eq!(reply.data, ReplyData::Array(Vec::new()));
}

#[test]
fn test_array_of_bulk_strings() {
    let reply = parse_one(b"*2\r\n$1\r\n3\r\n$1\r\n2\r\n").unwrap();
    let items = reply.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_str(), Some("3"));
    assert_eq!(items[1].as_str(), Some("2"));
}

#[test]
fn test_nested_array() {
    let reply = parse_one(b"*2\r\n*2\r\n+a\r\n:5\r\n$-1\r\n").unwrap();
    let items = reply.as_array().unwrap();
    let inner = items[0].as_array().unwrap();
    assert_eq!(inner[0].as_str(), Some("a"));
    assert_eq!(inner[1].as_integer(), Some(5));
    assert!(items[1].is_nil());
}

#[test]
fn test_raw_spans_cover_nested_elements() {
    let input: &[u8] = b"*1\r\n$1\r\nx\r\n";
    let reply = parse_one(input).unwrap();
    assert_eq!(&reply.raw[..], input);
    assert_eq!(&reply.as_array().unwrap()[0].raw[..], b"$1\r\nx\r\n");
}

#[test]
fn test_unknown_tag_names_the_byte() {
    assert_eq!(parse_one(b"?bad\r\n"), Err(ParseError::InvalidTypeMarker('?')));
}

#[rstest]
#[case(b"$abc\r\n")]
#[case(b":12a3\r\n")]
#[case(b"*x\r\n")]
fn test_malformed_length_fields(#[case] input: &'static [u8]) {
    assert!(matches!(
        parse_one(input),
        Err(ParseError::InvalidInteger(_))
    ));
}

#[rstest]
#[case(b"+OK\rX\r\n")]
#[case(b"$3\r\nabcXX")]
fn test_framing_violations(#[case] input: &'static [u8]) {
    assert!(matches!(parse_one(input), Err(ParseError::InvalidFormat(_))));
}

#[rstest]
#[case(b"")]
#[case(b"+OK")]
#[case(b"+OK\r")]
#[case(b"$10\r\nfoo")]
#[case(b"*2\r\n+a\r\n")]
fn test_truncated_frames(#[case] input: &'static [u8]) {
    assert_eq!(parse_one(input), Err(ParseError::UnexpectedEof));
}

#[test]
fn test_batch_decode_preserves_order() {
    let mut cursor = Cursor::new(&b"+OK\r\n:1\r\n"[..]);
    let replies = parse_all(&mut cursor).unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(
        replies[0].data,
        ReplyData::SimpleString(Bytes::from_static(b"OK"))
    );
    assert_eq!(replies[1].data, ReplyData::Integer(1));
    assert_eq!(&replies[0].raw[..], b"+OK\r\n");
    assert_eq!(&replies[1].raw[..], b":1\r\n");
    assert!(cursor.is_exhausted());
}

#[test]
fn test_batch_decode_fails_on_truncated_tail() {
    let mut cursor = Cursor::new(&b"+OK\r\n$5\r\nhel"[..]);
    assert_eq!(parse_all(&mut cursor), Err(ParseError::UnexpectedEof));
}
