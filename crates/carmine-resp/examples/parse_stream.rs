use bytes::Bytes;
use bytes::BytesMut;
use carmine_resp::Cursor;
use carmine_resp::ParseError;
use carmine_resp::parse_all;

fn main() {
    println!("--- RESP capture decode example ---");

    // Simulate a TCP read loop delivering fragmented data. The full stream
    // carries three replies:
    // - A Simple String: "+OK\r\n"
    // - An Integer: ":1000\r\n"
    // - An Array: "*2\r\n$7\r\nmessage\r\n$5\r\nhello\r\n"
    let chunks = [
        b"+O".as_slice(),
        b"K\r\n:1".as_slice(),
        b"000\r\n*2\r\n$7\r\nmess".as_slice(),
        b"age\r\n$5\r\nhello\r\n".as_slice(),
    ];

    let mut capture = BytesMut::new();

    for (i, chunk) in chunks.iter().enumerate() {
        capture.extend_from_slice(chunk);
        println!("\n[stream] chunk {} arrived, capture is {} bytes", i, capture.len());

        // A transport would retry the decode after each read while the
        // trailing frame is still incomplete.
        let mut cursor = Cursor::new(Bytes::copy_from_slice(&capture));
        match parse_all(&mut cursor) {
            Ok(replies) => {
                for reply in &replies {
                    println!("[decode] {reply}");
                }
                return;
            }
            Err(ParseError::UnexpectedEof) => {
                println!("[decode] incomplete, waiting for more data");
            }
            Err(e) => {
                eprintln!("[decode] error: {e}");
                return;
            }
        }
    }
}
