/// Statement of Faith, always included in the assistant's instructions.
pub const STATEMENT_OF_FAITH: &str = "\
Statement of Faith for Living Hope Church:
1. **The Bible**: We believe the Bible, as originally given, to be the inspired, infallible and authoritative Word of God. It is the all-sufficient rule for our faith and practice.
2. **The Trinity**: We believe in one God, eternally existent in three persons: Father, Son and Holy Spirit.
3. **Jesus Christ**: We believe in the deity of our Lord Jesus Christ, His virgin birth, His sinless life, His miracles, His atoning death on the cross, His bodily resurrection, His ascension to the right hand of the Father and His personal return in power and glory.
4. **Humanity & Salvation**: We believe that man was created in the image of God but fell into sin and is therefore lost. Only through regeneration by the Holy Spirit can salvation and spiritual life be obtained. The shed blood of Jesus Christ and His resurrection provide the only ground for justification and salvation.
5. **The Holy Spirit**: We believe in the present ministry of the Holy Spirit, by whose indwelling the Christian is enabled to live a godly life.
6. **The Church**: We believe in the spiritual unity of believers in our Lord Jesus Christ, who is the Head of the church.
7. **The Resurrection & Future**: We believe in the resurrection of both the saved and the lost; they that are saved unto the resurrection of life, and they that are lost unto the resurrection of damnation.";
